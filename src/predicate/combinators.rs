//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the logical
//! combinators for composing predicates, and the `apply`/`filter_view`
//! operations that run a predicate over a sequence.

use std::borrow::Borrow;

use super::boxed::BoxedPredicate;
use super::filter::FilterView;

/// A reusable boolean test over values of type `T`.
///
/// Predicates are immutable once built. Any `Fn(&T) -> bool` closure is a
/// predicate, and so is every combinator in this module.
///
/// # Example
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let small = lt(10).and(ge(0));
/// assert!(small.check(&3));
/// assert!(!small.check(&12));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Returns `true` when `value` passes the test.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension methods available on every predicate.
///
/// Logical combinators return concrete types, so chains of `and`/`or`/`not`
/// stay monomorphic. Use [`boxed`](PredicateExt::boxed) when different
/// predicate types have to live in one collection.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates hold.
    ///
    /// ```rust
    /// use fieldwise::predicate::*;
    ///
    /// let p = gt(0).and(lt(100));
    /// assert!(p.check(&50));
    /// assert!(!p.check(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate holds.
    ///
    /// ```rust
    /// use fieldwise::predicate::*;
    ///
    /// let outside = lt(0).or(gt(100));
    /// assert!(outside.check(&-5));
    /// assert!(!outside.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Inverts the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erases the concrete type so the predicate can be stored next to
    /// predicates of other types.
    ///
    /// ```rust
    /// use fieldwise::predicate::*;
    ///
    /// let tests: Vec<BoxedPredicate<i32>> = vec![gt(0).boxed(), ne(3).boxed()];
    /// assert!(tests.iter().all(|p| p.check(&5)));
    /// ```
    fn boxed(self) -> BoxedPredicate<T>
    where
        Self: 'static,
    {
        BoxedPredicate::new(self)
    }

    /// Eagerly filters `items`, keeping the elements that pass in their
    /// original order.
    ///
    /// Items may be owned values or references to them.
    ///
    /// ```rust
    /// use fieldwise::predicate::*;
    ///
    /// let evens = (|n: &i32| n % 2 == 0).apply(vec![1, 2, 3, 4]);
    /// assert_eq!(evens, vec![2, 4]);
    ///
    /// let source = [5, 15, 25];
    /// let big: Vec<&i32> = gt(10).apply(&source);
    /// assert_eq!(big, vec![&15, &25]);
    /// ```
    fn apply<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        items
            .into_iter()
            .filter(|item| self.check(item.borrow()))
            .collect()
    }

    /// Lazily filters `items` without allocating.
    ///
    /// ```rust
    /// use fieldwise::predicate::*;
    ///
    /// let p = gt(2);
    /// let mut view = p.filter_view(1..6);
    /// assert_eq!(view.next(), Some(3));
    /// assert_eq!(view.count(), 2);
    /// ```
    fn filter_view<I>(&self, items: I) -> FilterView<'_, I::IntoIter, Self, T>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        FilterView::new(items.into_iter(), self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[inline]
pub(crate) fn all_hold<T: ?Sized, P: Predicate<T>>(predicates: &[P], value: &T) -> bool {
    predicates.iter().all(|p| p.check(value))
}

#[inline]
pub(crate) fn any_holds<T: ?Sized, P: Predicate<T>>(predicates: &[P], value: &T) -> bool {
    predicates.iter().any(|p| p.check(value))
}

/// Conjunction over a fixed-size array of predicates of one type.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<P, const N: usize> AllOf<P, N> {
    /// Narrow `items` one member at a time, as a compound filter whose
    /// predicates share a type.
    ///
    /// Keeps the same elements as [`PredicateExt::apply`]; later members
    /// only see what earlier ones kept.
    ///
    /// ```rust
    /// use fieldwise::predicate::*;
    ///
    /// let window = all_of([ge(10).boxed(), lt(20).boxed()]);
    /// assert_eq!(window.narrow(vec![4, 12, 25, 19]), vec![12, 19]);
    /// ```
    pub fn narrow<T, I>(&self, items: I) -> Vec<I::Item>
    where
        T: ?Sized,
        P: Predicate<T>,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        super::list::filter_all(&self.0, items)
    }
}

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        all_hold(&self.0, value)
    }
}

/// Create a predicate that holds when every predicate in the array holds.
///
/// The array is homogeneous; mix predicate types by boxing them, or use a
/// [`PredicateList`](super::PredicateList).
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let tagged = all_of([contains("#"), contains("@")]);
/// assert!(tagged.check("@mo #urgent"));
/// assert!(!tagged.check("#urgent"));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Disjunction over a fixed-size array of predicates of one type.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        any_holds(&self.0, value)
    }
}

/// Create a predicate that holds when at least one predicate holds.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let weekend = any_of([eq("sat"), eq("sun")]);
/// assert!(weekend.check(&"sun"));
/// assert!(!weekend.check(&"mon"));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// Holds when no predicate in the array holds.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !any_holds(&self.0, value)
    }
}

/// Create a predicate that holds when none of the predicates hold.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let clean = none_of([contains_ignoring_case("spam"), contains_ignoring_case("scam")]);
/// assert!(clean.check("weekly digest"));
/// assert!(!clean.check("SPAM offer"));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}
