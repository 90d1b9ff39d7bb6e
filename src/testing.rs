//! Testing utilities for predicates and filters
//!
//! Assertion macros that report the offending value on failure, and, with
//! the `proptest` feature, `Arbitrary` implementations for the
//! configuration types so property tests can range over them.
//!
//! # Assertion Macros
//!
//! ```rust
//! use fieldwise::predicate::*;
//! use fieldwise::{assert_accepts, assert_filters_to, assert_rejects};
//!
//! assert_accepts!(gt(3), 4);
//! assert_rejects!(gt(3), 3);
//! assert_filters_to!(lt(3), vec![1, 5, 2], vec![1, 2]);
//! ```

/// Assert that a predicate accepts a value.
///
/// # Example
///
/// ```rust
/// use fieldwise::assert_accepts;
/// use fieldwise::predicate::contains;
///
/// assert_accepts!(contains("ell"), String::from("hello"));
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($predicate:expr, $value:expr) => {
        match (&$predicate, &$value) {
            (predicate, value) => {
                if !$crate::predicate::Predicate::check(predicate, value) {
                    panic!("Expected predicate to accept {:?}", value);
                }
            }
        }
    };
}

/// Assert that a predicate rejects a value.
///
/// # Example
///
/// ```rust
/// use fieldwise::assert_rejects;
/// use fieldwise::predicate::lt;
///
/// assert_rejects!(lt(0), 5);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $value:expr) => {
        match (&$predicate, &$value) {
            (predicate, value) => {
                if $crate::predicate::Predicate::check(predicate, value) {
                    panic!("Expected predicate to reject {:?}", value);
                }
            }
        }
    };
}

/// Assert that filtering `input` with a predicate yields `expected`.
///
/// # Example
///
/// ```rust
/// use fieldwise::assert_filters_to;
/// use fieldwise::predicate::ne;
///
/// assert_filters_to!(ne(0), vec![0, 1, 0, 2], vec![1, 2]);
/// ```
#[macro_export]
macro_rules! assert_filters_to {
    ($predicate:expr, $input:expr, $expected:expr) => {{
        let filtered = $crate::predicate::PredicateExt::apply(&$predicate, $input);
        assert_eq!(filtered, $expected, "filtered output differs");
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::predicate::MatchMode {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::predicate::MatchMode;

        prop_oneof![
            Just(MatchMode::Exact),
            Just(MatchMode::CaseInsensitive),
            Just(MatchMode::Standard),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for crate::predicate::ContainsOptions {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::predicate::{ContainsOptions, MatchMode};

        (any::<MatchMode>(), any::<bool>())
            .prop_map(|(mode, contains_empty)| {
                ContainsOptions::default()
                    .with_mode(mode)
                    .with_contains_empty(contains_empty)
            })
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for crate::sequence::SortOrder {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::sequence::SortOrder;

        prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)].boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::predicate::{contains, gt, lt};

    #[test]
    fn assert_accepts_macro() {
        assert_accepts!(gt(1), 2);
        assert_accepts!(contains("b"), String::from("abc"));
    }

    #[test]
    fn assert_rejects_macro() {
        assert_rejects!(lt(1), 2);
    }

    #[test]
    fn assert_filters_to_macro() {
        assert_filters_to!(gt(1), vec![0, 1, 2, 3], vec![2, 3]);
    }

    #[test]
    #[should_panic(expected = "Expected predicate to accept 0")]
    fn assert_accepts_panics_on_rejection() {
        assert_accepts!(gt(1), 0);
    }

    #[test]
    #[should_panic(expected = "Expected predicate to reject 2")]
    fn assert_rejects_panics_on_acceptance() {
        assert_rejects!(gt(1), 2);
    }

    #[test]
    #[should_panic(expected = "filtered output differs")]
    fn assert_filters_to_panics_on_mismatch() {
        assert_filters_to!(gt(1), vec![0, 5], vec![0, 5]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::predicate::{contains_with, ContainsOptions, Predicate};
        use crate::sequence::{SequenceExt, SortOrder};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn empty_pattern_with_flag_accepts_anything(
                options in any::<ContainsOptions>(),
                haystack in ".{0,20}",
            ) {
                let p = contains_with("", options);
                if options.contains_empty {
                    prop_assert!(p.check(haystack.as_str()));
                }
            }

            #[test]
            fn sorting_is_a_permutation(
                order in any::<SortOrder>(),
                values in prop::collection::vec(any::<i16>(), 0..40),
            ) {
                let mut sorted = values.iter().sorted_by_field(|v: &i16| v, order);
                sorted.sort();
                let mut expected: Vec<&i16> = values.iter().collect();
                expected.sort();
                prop_assert_eq!(sorted, expected);
            }
        }
    }
}
