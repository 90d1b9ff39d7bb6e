//! BoxedPredicate for type erasure.

use std::fmt;

use super::combinators::Predicate;

/// A type-erased predicate.
///
/// Boxing lets predicates of different concrete types share one
/// collection, which is what a [`PredicateList`](super::PredicateList) is
/// built from.
///
/// # Example
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let tests: Vec<BoxedPredicate<i32>> = vec![
///     BoxedPredicate::custom(|n: &i32| n % 2 == 0),
///     gt(10).boxed(),
/// ];
///
/// assert!(tests.iter().all(|p| p.check(&12)));
/// assert!(!tests.iter().all(|p| p.check(&8)));
/// ```
pub struct BoxedPredicate<T: ?Sized> {
    inner: Box<dyn Predicate<T>>,
}

impl<T: ?Sized> BoxedPredicate<T> {
    /// Box any predicate.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Self {
            inner: Box::new(predicate),
        }
    }

    /// Wrap an arbitrary test function.
    pub fn custom<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(test)
    }
}

impl<T: ?Sized> Predicate<T> for BoxedPredicate<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.inner.check(value)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedPredicate").finish_non_exhaustive()
    }
}

/// Wrap an arbitrary test function as a boxed predicate.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let short = custom(|s: &str| s.len() < 4);
/// assert!(short.check("abc"));
/// assert!(!short.check("abcd"));
/// ```
pub fn custom<T, F>(test: F) -> BoxedPredicate<T>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    BoxedPredicate::custom(test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{gt, lt, PredicateExt};

    #[test]
    fn boxed_preserves_behavior() {
        let p = gt(3).and(lt(8)).boxed();
        assert!(p.check(&5));
        assert!(!p.check(&8));
    }

    #[test]
    fn boxed_predicates_compose() {
        let p = custom(|n: &i32| *n != 0).and(gt(-5).boxed());
        assert!(p.check(&-1));
        assert!(!p.check(&0));
        assert!(!p.check(&-9));
    }

    #[test]
    fn boxed_predicate_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>(_: &S) {}
        assert_send_sync(&custom(|n: &u8| *n > 1));
    }

    #[test]
    fn debug_does_not_expose_closure() {
        let p = custom(|_: &i32| true);
        assert_eq!(format!("{:?}", p), "BoxedPredicate { .. }");
    }
}
