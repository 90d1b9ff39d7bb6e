//! Compound filters
//!
//! A [`PredicateList`] is an ordered list of boxed predicates whose
//! combined meaning is the logical AND of its members. Order only affects
//! how much work later passes do, never the result.

use std::borrow::Borrow;
use std::fmt;

use super::boxed::BoxedPredicate;
use super::combinators::{all_hold, Predicate};

/// Filter `items` through each predicate in turn.
///
/// Pass `n` keeps the survivors of pass `n - 1` that satisfy
/// `predicates[n]`, narrowing one owned buffer in place. With no predicates
/// the input is returned unchanged.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let kept = filter_all(&[gt(2).boxed(), lt(9).boxed()], vec![1, 4, 9, 7]);
/// assert_eq!(kept, vec![4, 7]);
///
/// let same_type = filter_all(&[ne(4), ne(7)], vec![1, 4, 9, 7]);
/// assert_eq!(same_type, vec![1, 9]);
/// ```
pub fn filter_all<T, P, I>(predicates: &[P], items: I) -> Vec<I::Item>
where
    T: ?Sized,
    P: Predicate<T>,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let mut remaining: Vec<I::Item> = items.into_iter().collect();
    for (pass, predicate) in predicates.iter().enumerate() {
        if remaining.is_empty() {
            break;
        }
        let before = remaining.len();
        remaining.retain(|item| predicate.check(item.borrow()));
        trace_pass(pass, before, remaining.len());
    }
    remaining
}

#[inline]
fn trace_pass(pass: usize, before: usize, after: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(pass, before, after, "narrowed");
    #[cfg(not(feature = "tracing"))]
    let _ = (pass, before, after);
}

/// An ordered list of predicates applied as a conjunction.
///
/// # Example
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Item {
///     amount: Option<u32>,
/// }
///
/// let items: Vec<Item> = [Some(1), Some(2), None, Some(5)]
///     .into_iter()
///     .map(|amount| Item { amount })
///     .collect();
///
/// let filters = PredicateList::new()
///     .with(field::is_some(|i: &Item| &i.amount))
///     .with(on(|i: &Item| &i.amount, some(lt(2))));
///
/// assert_eq!(filters.apply(&items), vec![&Item { amount: Some(1) }]);
/// ```
pub struct PredicateList<T: ?Sized> {
    predicates: Vec<BoxedPredicate<T>>,
}

impl<T: ?Sized> PredicateList<T> {
    /// An empty list, which accepts everything.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a predicate, builder style.
    pub fn with<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        self.push(predicate);
        self
    }

    /// Append a predicate.
    pub fn push<P>(&mut self, predicate: P)
    where
        P: Predicate<T> + 'static,
    {
        self.predicates.push(BoxedPredicate::new(predicate));
    }

    /// Number of predicates in the list.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the list has no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// The predicates in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoxedPredicate<T>> {
        self.predicates.iter()
    }

    /// Filter `items` one predicate at a time. See [`filter_all`].
    pub fn apply<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        filter_all(&self.predicates, items)
    }

    /// Filter `items` in a single pass, testing every predicate per element.
    ///
    /// Produces the same result as [`apply`](Self::apply).
    pub fn apply_fused<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        items
            .into_iter()
            .filter(|item| self.check(item.borrow()))
            .collect()
    }
}

impl<T: ?Sized> Predicate<T> for PredicateList<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        all_hold(&self.predicates, value)
    }
}

impl<T: ?Sized> Default for PredicateList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> From<Vec<BoxedPredicate<T>>> for PredicateList<T> {
    fn from(predicates: Vec<BoxedPredicate<T>>) -> Self {
        Self { predicates }
    }
}

impl<T: ?Sized> FromIterator<BoxedPredicate<T>> for PredicateList<T> {
    fn from_iter<I: IntoIterator<Item = BoxedPredicate<T>>>(iter: I) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> Extend<BoxedPredicate<T>> for PredicateList<T> {
    fn extend<I: IntoIterator<Item = BoxedPredicate<T>>>(&mut self, iter: I) {
        self.predicates.extend(iter);
    }
}

impl<T: ?Sized> fmt::Debug for PredicateList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateList")
            .field("len", &self.predicates.len())
            .finish()
    }
}
