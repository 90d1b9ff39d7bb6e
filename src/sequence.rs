//! Searching, testing and sorting sequences through predicates and fields
//!
//! [`SequenceExt`] is implemented for every iterator. Its methods take
//! predicates by reference, so one predicate can drive many searches, and
//! accept sequences of owned elements or of references to them.
//!
//! ```rust
//! use fieldwise::predicate::field;
//! use fieldwise::sequence::{SequenceExt, SortOrder};
//!
//! struct City {
//!     name: &'static str,
//!     population: u32,
//!     capital: bool,
//! }
//!
//! let cities = [
//!     City { name: "Lyon", population: 522_000, capital: false },
//!     City { name: "Paris", population: 2_103_000, capital: true },
//!     City { name: "Nice", population: 342_000, capital: false },
//! ];
//!
//! let capital = field::is_true(|c: &City| &c.capital);
//! assert_eq!(cities.iter().first_where(&capital).map(|c| c.name), Some("Paris"));
//!
//! let by_size = cities
//!     .iter()
//!     .sorted_by_field(|c: &City| &c.population, SortOrder::Descending);
//! let names: Vec<_> = by_size.iter().map(|c| c.name).collect();
//! assert_eq!(names, vec!["Paris", "Lyon", "Nice"]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::predicate::{FilterView, Predicate};

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

// Total order over a `PartialOrd` field. A value that does not compare with
// itself (NaN) sorts after every value that does.
fn compare_fields<V: PartialOrd + ?Sized>(a: &V, b: &V) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => {
            let a_ordered = a.partial_cmp(a).is_some();
            let b_ordered = b.partial_cmp(b).is_some();
            b_ordered.cmp(&a_ordered)
        }
    }
}

/// Predicate- and field-driven operations on any iterator.
pub trait SequenceExt: Iterator + Sized {
    /// Lazily keep the elements that pass `predicate`.
    fn filter_by<T, P>(self, predicate: &P) -> FilterView<'_, Self, P, T>
    where
        T: ?Sized,
        P: Predicate<T>,
        Self::Item: Borrow<T>,
    {
        FilterView::new(self, predicate)
    }

    /// Collect the elements that pass `predicate`, in order.
    fn collect_where<T, P>(self, predicate: &P) -> Vec<Self::Item>
    where
        T: ?Sized,
        P: Predicate<T>,
        Self::Item: Borrow<T>,
    {
        self.filter_by(predicate).collect()
    }

    /// The first element that passes `predicate`.
    fn first_where<T, P>(mut self, predicate: &P) -> Option<Self::Item>
    where
        T: ?Sized,
        P: Predicate<T>,
        Self::Item: Borrow<T>,
    {
        self.find(|item| predicate.check(item.borrow()))
    }

    /// The last element that passes `predicate`.
    ///
    /// Walks the whole sequence; use `.rev().first_where(..)` on
    /// double-ended iterators to search from the back instead.
    fn last_where<T, P>(self, predicate: &P) -> Option<Self::Item>
    where
        T: ?Sized,
        P: Predicate<T>,
        Self::Item: Borrow<T>,
    {
        self.filter_by(predicate).last()
    }

    /// Whether any element passes `predicate`.
    fn contains_where<T, P>(mut self, predicate: &P) -> bool
    where
        T: ?Sized,
        P: Predicate<T>,
        Self::Item: Borrow<T>,
    {
        self.any(|item| predicate.check(item.borrow()))
    }

    /// Whether every element passes `predicate`. True for an empty sequence.
    fn all_satisfy<T, P>(mut self, predicate: &P) -> bool
    where
        T: ?Sized,
        P: Predicate<T>,
        Self::Item: Borrow<T>,
    {
        self.all(|item| predicate.check(item.borrow()))
    }

    /// Number of elements that pass `predicate`.
    fn count_where<T, P>(self, predicate: &P) -> usize
    where
        T: ?Sized,
        P: Predicate<T>,
        Self::Item: Borrow<T>,
    {
        self.filter_by(predicate).count()
    }

    /// Collect and stably sort by the field reached through `key`.
    ///
    /// Field values that do not compare with themselves (`NaN`) count as
    /// larger than every other value: last when ascending, first when
    /// descending.
    fn sorted_by_field<T, V, K>(self, key: K, order: SortOrder) -> Vec<Self::Item>
    where
        T: ?Sized,
        V: PartialOrd + ?Sized,
        K: Fn(&T) -> &V,
        Self::Item: Borrow<T>,
    {
        let mut items: Vec<Self::Item> = self.collect();
        items.sort_by(|a, b| order.apply(compare_fields(key(a.borrow()), key(b.borrow()))));
        items
    }

    /// The element with the smallest field; the first one on ties.
    ///
    /// Uses the same ordering as [`sorted_by_field`](Self::sorted_by_field).
    fn min_by_field<T, V, K>(self, key: K) -> Option<Self::Item>
    where
        T: ?Sized,
        V: PartialOrd + ?Sized,
        K: Fn(&T) -> &V,
        Self::Item: Borrow<T>,
    {
        self.min_by(|a, b| compare_fields(key(a.borrow()), key(b.borrow())))
    }

    /// The element with the largest field; the last one on ties.
    fn max_by_field<T, V, K>(self, key: K) -> Option<Self::Item>
    where
        T: ?Sized,
        V: PartialOrd + ?Sized,
        K: Fn(&T) -> &V,
        Self::Item: Borrow<T>,
    {
        self.max_by(|a, b| compare_fields(key(a.borrow()), key(b.borrow())))
    }
}

impl<I: Iterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{field, gt, lt, PredicateExt};

    #[derive(Debug, Clone, PartialEq)]
    struct Run {
        runner: &'static str,
        km: f64,
        minutes: u32,
    }

    fn runs() -> Vec<Run> {
        vec![
            Run { runner: "ada", km: 5.0, minutes: 31 },
            Run { runner: "bob", km: 10.0, minutes: 58 },
            Run { runner: "cyd", km: 5.0, minutes: 27 },
            Run { runner: "dee", km: 21.1, minutes: 131 },
        ]
    }

    fn names<'a>(items: impl IntoIterator<Item = &'a Run>) -> Vec<&'static str> {
        items.into_iter().map(|r| r.runner).collect()
    }

    #[test]
    fn first_and_last_where() {
        let all = runs();
        let short = field::lt(|r: &Run| &r.km, 6.0);
        assert_eq!(all.iter().first_where(&short).map(|r| r.runner), Some("ada"));
        assert_eq!(all.iter().last_where(&short).map(|r| r.runner), Some("cyd"));
        assert_eq!(all.iter().rev().first_where(&short).map(|r| r.runner), Some("cyd"));

        let ultra = field::gt(|r: &Run| &r.km, 50.0);
        assert!(all.iter().first_where(&ultra).is_none());
        assert!(all.iter().last_where(&ultra).is_none());
    }

    #[test]
    fn membership_and_universal_tests() {
        let all = runs();
        let slow = field::gt(|r: &Run| &r.minutes, 100);
        assert!(all.iter().contains_where(&slow));
        assert!(!all.iter().all_satisfy(&slow));

        let positive = field::gt(|r: &Run| &r.km, 0.0);
        assert!(all.iter().all_satisfy(&positive));
        assert!(std::iter::empty::<Run>().all_satisfy(&slow));
        assert!(!std::iter::empty::<Run>().contains_where(&positive));
    }

    #[test]
    fn count_and_collect_where() {
        let all = runs();
        let five_k = field::eq(|r: &Run| &r.km, 5.0);
        assert_eq!(all.iter().count_where(&five_k), 2);
        assert_eq!(names(all.iter().collect_where(&five_k)), vec!["ada", "cyd"]);

        let owned: Vec<Run> = all.clone().into_iter().collect_where(&five_k);
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn filter_by_is_lazy_and_composable() {
        let window = gt(2).and(lt(6));
        let picked: Vec<i32> = (0..10).filter_by(&window).take(2).collect();
        assert_eq!(picked, vec![3, 4]);
    }

    #[test]
    fn sorted_by_field_is_stable() {
        let all = runs();
        let ascending = all.iter().sorted_by_field(|r: &Run| &r.km, SortOrder::Ascending);
        assert_eq!(names(ascending), vec!["ada", "cyd", "bob", "dee"]);

        let descending = all.iter().sorted_by_field(|r: &Run| &r.km, SortOrder::Descending);
        assert_eq!(names(descending), vec!["dee", "bob", "ada", "cyd"]);
    }

    #[test]
    fn sorted_by_field_puts_nan_last() {
        let values = vec![2.0, f64::NAN, 1.0, 0.5];
        let sorted = values.into_iter().sorted_by_field(|v: &f64| v, SortOrder::Ascending);
        assert_eq!(&sorted[..3], &[0.5, 1.0, 2.0]);
        assert!(sorted[3].is_nan());

        let values = vec![2.0, f64::NAN, 1.0];
        let sorted = values.into_iter().sorted_by_field(|v: &f64| v, SortOrder::Descending);
        assert!(sorted[0].is_nan());
        assert_eq!(&sorted[1..], &[2.0, 1.0]);
    }

    #[test]
    fn min_by_field_skips_nan() {
        let values = [f64::NAN, 3.0, 1.5];
        assert_eq!(values.iter().min_by_field(|v: &f64| v), Some(&1.5));
    }

    #[test]
    fn min_and_max_by_field() {
        let all = runs();
        let fastest = all.iter().min_by_field(|r: &Run| &r.minutes);
        assert_eq!(fastest.map(|r| r.runner), Some("cyd"));

        let shortest = all.iter().min_by_field(|r: &Run| &r.km);
        assert_eq!(shortest.map(|r| r.runner), Some("ada"));

        let longest = all.iter().max_by_field(|r: &Run| &r.km);
        assert_eq!(longest.map(|r| r.runner), Some("dee"));

        assert!(Vec::<Run>::new().into_iter().max_by_field(|r: &Run| &r.km).is_none());
    }

    #[test]
    fn sort_order_reverses() {
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sort_order_serializes_by_name() {
        let json = serde_json::to_string(&SortOrder::Descending).unwrap();
        assert_eq!(json, "\"Descending\"");
        let back: SortOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SortOrder::Descending);
    }
}
