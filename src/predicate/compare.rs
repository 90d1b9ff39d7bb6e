//! Comparison predicates
//!
//! Equality and ordering tests against a fixed operand. On their own they
//! test a value directly; wrapped with [`on`](super::on) they test a field.
//!
//! Ordering predicates only require `PartialOrd`. Pairs that do not compare
//! (a `NaN` on either side) fail every ordering test.

use super::combinators::Predicate;

/// Predicate for equality.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Eq<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Create a predicate that checks for equality.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert!(eq("open").check(&"open"));
/// assert!(eq(Some(2)).check(&Some(2)));
/// assert!(!eq(Some(2)).check(&None));
/// ```
pub fn eq<T: PartialEq + Send + Sync>(value: T) -> Eq<T> {
    Eq(value)
}

/// Predicate for inequality.
#[derive(Clone, Copy, Debug)]
pub struct Ne<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Ne<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value != self.0
    }
}

/// Create a predicate that checks for inequality.
pub fn ne<T: PartialEq + Send + Sync>(value: T) -> Ne<T> {
    Ne(value)
}

macro_rules! ordering_predicate {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T>(pub T);

        impl<T: PartialOrd + Send + Sync> Predicate<T> for $name<T> {
            #[inline]
            fn check(&self, value: &T) -> bool {
                *value $op self.0
            }
        }

        $(#[$doc])*
        pub fn $ctor<T: PartialOrd + Send + Sync>(bound: T) -> $name<T> {
            $name(bound)
        }
    };
}

ordering_predicate!(
    /// Holds for values strictly below the bound.
    Lt, lt, <
);
ordering_predicate!(
    /// Holds for values at or below the bound.
    Le, le, <=
);
ordering_predicate!(
    /// Holds for values strictly above the bound.
    Gt, gt, >
);
ordering_predicate!(
    /// Holds for values at or above the bound.
    Ge, ge, >=
);

/// Predicate for a closed range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks `min <= value <= max`.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let p = between(0, 100);
/// assert!(p.check(&0));
/// assert!(p.check(&100));
/// assert!(!p.check(&101));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Holds for `Some` values that pass the inner predicate; `None` fails.
#[derive(Clone, Copy, Debug)]
pub struct IsSomeAnd<P>(pub P);

impl<V, P: Predicate<V>> Predicate<Option<V>> for IsSomeAnd<P> {
    #[inline]
    fn check(&self, value: &Option<V>) -> bool {
        value.as_ref().is_some_and(|v| self.0.check(v))
    }
}

/// Lift a predicate over `V` to one over `Option<V>`.
///
/// An absent value never passes, so `some(eq(x))` is "present and equal".
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let cheap = some(lt(2));
/// assert!(cheap.check(&Some(1)));
/// assert!(!cheap.check(&Some(5)));
/// assert!(!cheap.check(&None));
/// ```
pub fn some<P>(predicate: P) -> IsSomeAnd<P> {
    IsSomeAnd(predicate)
}

/// Holds for `None`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNone;

impl<V> Predicate<Option<V>> for IsNone {
    #[inline]
    fn check(&self, value: &Option<V>) -> bool {
        value.is_none()
    }
}

/// Holds for `Some(_)`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsSome;

impl<V> Predicate<Option<V>> for IsSome {
    #[inline]
    fn check(&self, value: &Option<V>) -> bool {
        value.is_some()
    }
}

/// Holds for `true`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsTrue;

impl Predicate<bool> for IsTrue {
    #[inline]
    fn check(&self, value: &bool) -> bool {
        *value
    }
}

/// Holds for `false`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsFalse;

impl Predicate<bool> for IsFalse {
    #[inline]
    fn check(&self, value: &bool) -> bool {
        !*value
    }
}
