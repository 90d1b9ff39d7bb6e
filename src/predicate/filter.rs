//! Lazy filtered view over a sequence.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::combinators::Predicate;

/// Iterator yielding the elements of `I` that pass a borrowed predicate.
///
/// Created by [`PredicateExt::filter_view`](super::PredicateExt::filter_view)
/// and [`SequenceExt::filter_by`](crate::sequence::SequenceExt::filter_by).
/// Nothing is buffered; each `next` pulls from the source until an element
/// passes or the source ends.
pub struct FilterView<'p, I, P, T: ?Sized> {
    iter: I,
    predicate: &'p P,
    _marker: PhantomData<fn(&T)>,
}

impl<'p, I, P, T: ?Sized> FilterView<'p, I, P, T> {
    pub(crate) fn new(iter: I, predicate: &'p P) -> Self {
        Self {
            iter,
            predicate,
            _marker: PhantomData,
        }
    }

    /// Consumes the view and returns the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I, P, T> Iterator for FilterView<'_, I, P, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    P: Predicate<T>,
    T: ?Sized,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let predicate = self.predicate;
        self.iter.find(|item| predicate.check(item.borrow()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P, T> DoubleEndedIterator for FilterView<'_, I, P, T>
where
    I: DoubleEndedIterator,
    I::Item: Borrow<T>,
    P: Predicate<T>,
    T: ?Sized,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let predicate = self.predicate;
        self.iter.rfind(|item| predicate.check(item.borrow()))
    }
}

impl<I, P, T> FusedIterator for FilterView<'_, I, P, T>
where
    I: FusedIterator,
    I::Item: Borrow<T>,
    P: Predicate<T>,
    T: ?Sized,
{
}

impl<I: Clone, P, T: ?Sized> Clone for FilterView<'_, I, P, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            predicate: self.predicate,
            _marker: PhantomData,
        }
    }
}

impl<I: fmt::Debug, P, T: ?Sized> fmt::Debug for FilterView<'_, I, P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterView")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}
