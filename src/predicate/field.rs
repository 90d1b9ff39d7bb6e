//! Field projection predicates
//!
//! A field is reached through a key: a closure projecting an element to a
//! borrowed field, such as `|order: &Order| &order.total`. [`on`] pairs a
//! key with any predicate over the field type; the named constructors in
//! this module cover the common comparisons.
//!
//! ```rust
//! use fieldwise::predicate::{field, PredicateExt};
//!
//! struct Order {
//!     customer: String,
//!     total: u32,
//!     coupon: Option<String>,
//!     paid: bool,
//! }
//!
//! let orders = vec![
//!     Order { customer: "Ana".into(), total: 40, coupon: None, paid: true },
//!     Order { customer: "Bo".into(), total: 90, coupon: Some("SPRING".into()), paid: false },
//!     Order { customer: "Cy".into(), total: 15, coupon: Some("VIP".into()), paid: true },
//! ];
//!
//! let unpaid = field::is_false(|o: &Order| &o.paid);
//! assert_eq!(unpaid.apply(&orders).len(), 1);
//!
//! let discounted_and_paid = field::is_some(|o: &Order| &o.coupon)
//!     .and(field::is_true(|o: &Order| &o.paid));
//! let names: Vec<&str> = discounted_and_paid
//!     .apply(&orders)
//!     .into_iter()
//!     .map(|o| o.customer.as_str())
//!     .collect();
//! assert_eq!(names, vec!["Cy"]);
//!
//! let big = field::ge(|o: &Order| &o.total, 40);
//! assert_eq!(big.apply(&orders).len(), 2);
//! ```

use super::combinators::{Not, Predicate};
use super::compare::{Eq, Ge, Gt, IsFalse, IsNone, IsSome, IsSomeAnd, IsTrue, Le, Lt, Ne};
use super::string::{Contains, ContainsOptions};

/// Tests a borrowed field of an element with an inner predicate.
#[derive(Clone, Copy, Debug)]
pub struct On<K, P> {
    key: K,
    predicate: P,
}

impl<T, V, K, P> Predicate<T> for On<K, P>
where
    T: ?Sized,
    V: ?Sized,
    K: Fn(&T) -> &V + Send + Sync,
    P: Predicate<V>,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.predicate.check((self.key)(value))
    }
}

/// Test the field reached by `key` with `predicate`.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let p = on(|pair: &(u8, String)| &pair.1, contains("ust"));
/// assert!(p.check(&(1, "rust".to_string())));
/// assert!(!p.check(&(2, "go".to_string())));
/// ```
pub fn on<T, V, K, P>(key: K, predicate: P) -> On<K, P>
where
    T: ?Sized,
    V: ?Sized,
    K: Fn(&T) -> &V + Send + Sync,
    P: Predicate<V>,
{
    On { key, predicate }
}

/// Tests a computed value of an element with an inner predicate.
#[derive(Clone, Copy, Debug)]
pub struct OnValue<F, P> {
    project: F,
    predicate: P,
}

impl<T, V, F, P> Predicate<T> for OnValue<F, P>
where
    T: ?Sized,
    F: Fn(&T) -> V + Send + Sync,
    P: Predicate<V>,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.predicate.check(&(self.project)(value))
    }
}

/// Test a value computed from each element with `predicate`.
///
/// Use this when the projection produces an owned value rather than a
/// reference into the element.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let wide = on_value(|s: &str| s.chars().count(), gt(3));
/// assert!(wide.check("héllo"));
/// assert!(!wide.check("hé"));
/// ```
pub fn on_value<T, V, F, P>(project: F, predicate: P) -> OnValue<F, P>
where
    T: ?Sized,
    F: Fn(&T) -> V + Send + Sync,
    P: Predicate<V>,
{
    OnValue { project, predicate }
}

/// The optional field is absent.
pub fn is_none<T, V, K>(key: K) -> On<K, IsNone>
where
    T: ?Sized,
    K: Fn(&T) -> &Option<V> + Send + Sync,
{
    On {
        key,
        predicate: IsNone,
    }
}

/// The optional field is present.
pub fn is_some<T, V, K>(key: K) -> On<K, IsSome>
where
    T: ?Sized,
    K: Fn(&T) -> &Option<V> + Send + Sync,
{
    On {
        key,
        predicate: IsSome,
    }
}

/// The field equals `value`.
///
/// When the field is itself an `Option`, compare against an `Option`
/// (`None` equals `None`) or use [`eq_some`] to require presence.
pub fn eq<T, V, K>(key: K, value: V) -> On<K, Eq<V>>
where
    T: ?Sized,
    V: PartialEq + Send + Sync,
    K: Fn(&T) -> &V + Send + Sync,
{
    On {
        key,
        predicate: Eq(value),
    }
}

/// The field differs from `value`.
pub fn ne<T, V, K>(key: K, value: V) -> On<K, Ne<V>>
where
    T: ?Sized,
    V: PartialEq + Send + Sync,
    K: Fn(&T) -> &V + Send + Sync,
{
    On {
        key,
        predicate: Ne(value),
    }
}

/// The optional field is present and equals `value`. Absent never equals.
///
/// ```rust
/// use fieldwise::predicate::{field, Predicate};
///
/// let p = field::eq_some(|x: &Option<u8>| x, 3);
/// assert!(p.check(&Some(3)));
/// assert!(!p.check(&None));
/// ```
pub fn eq_some<T, V, K>(key: K, value: V) -> On<K, IsSomeAnd<Eq<V>>>
where
    T: ?Sized,
    V: PartialEq + Send + Sync,
    K: Fn(&T) -> &Option<V> + Send + Sync,
{
    On {
        key,
        predicate: IsSomeAnd(Eq(value)),
    }
}

/// Negation of [`eq_some`]: an absent field differs from every value.
pub fn ne_some<T, V, K>(key: K, value: V) -> On<K, Not<IsSomeAnd<Eq<V>>>>
where
    T: ?Sized,
    V: PartialEq + Send + Sync,
    K: Fn(&T) -> &Option<V> + Send + Sync,
{
    On {
        key,
        predicate: Not(IsSomeAnd(Eq(value))),
    }
}

macro_rules! field_ordering {
    ($(#[$doc:meta])* $ctor:ident, $pred:ident) => {
        $(#[$doc])*
        pub fn $ctor<T, V, K>(key: K, bound: V) -> On<K, $pred<V>>
        where
            T: ?Sized,
            V: PartialOrd + Send + Sync,
            K: Fn(&T) -> &V + Send + Sync,
        {
            On {
                key,
                predicate: $pred(bound),
            }
        }
    };
}

field_ordering!(
    /// The field is strictly below `bound`.
    lt, Lt
);
field_ordering!(
    /// The field is at or below `bound`.
    le, Le
);
field_ordering!(
    /// The field is strictly above `bound`.
    gt, Gt
);
field_ordering!(
    /// The field is at or above `bound`.
    ge, Ge
);

macro_rules! field_ordering_some {
    ($(#[$doc:meta])* $ctor:ident, $pred:ident) => {
        $(#[$doc])*
        pub fn $ctor<T, V, K>(key: K, bound: V) -> On<K, IsSomeAnd<$pred<V>>>
        where
            T: ?Sized,
            V: PartialOrd + Send + Sync,
            K: Fn(&T) -> &Option<V> + Send + Sync,
        {
            On {
                key,
                predicate: IsSomeAnd($pred(bound)),
            }
        }
    };
}

field_ordering_some!(
    /// The optional field is present and strictly below `bound`.
    ///
    /// Unlike [`lt`] over an `Option`, where `None` sorts below every
    /// `Some`, an absent field never passes.
    ///
    /// ```rust
    /// use fieldwise::predicate::{field, Predicate};
    ///
    /// let p = field::lt_some(|x: &Option<u8>| x, 3);
    /// assert!(p.check(&Some(2)));
    /// assert!(!p.check(&None));
    /// ```
    lt_some, Lt
);
field_ordering_some!(
    /// The optional field is present and at or below `bound`.
    le_some, Le
);
field_ordering_some!(
    /// The optional field is present and strictly above `bound`.
    gt_some, Gt
);
field_ordering_some!(
    /// The optional field is present and at or above `bound`.
    ge_some, Ge
);

/// The boolean field is `true`.
pub fn is_true<T, K>(key: K) -> On<K, IsTrue>
where
    T: ?Sized,
    K: Fn(&T) -> &bool + Send + Sync,
{
    On {
        key,
        predicate: IsTrue,
    }
}

/// The boolean field is `false`.
pub fn is_false<T, K>(key: K) -> On<K, IsFalse>
where
    T: ?Sized,
    K: Fn(&T) -> &bool + Send + Sync,
{
    On {
        key,
        predicate: IsFalse,
    }
}

/// The string field contains `pattern` (exact).
pub fn contains<T, V, K>(key: K, pattern: impl Into<String>) -> On<K, Contains>
where
    T: ?Sized,
    V: ?Sized,
    K: Fn(&T) -> &V + Send + Sync,
    Contains: Predicate<V>,
{
    contains_with(key, pattern, ContainsOptions::exact())
}

/// The string field contains `pattern`, ignoring case.
pub fn contains_ignoring_case<T, V, K>(key: K, pattern: impl Into<String>) -> On<K, Contains>
where
    T: ?Sized,
    V: ?Sized,
    K: Fn(&T) -> &V + Send + Sync,
    Contains: Predicate<V>,
{
    contains_with(key, pattern, ContainsOptions::ignoring_case())
}

/// The string field contains `pattern`, ignoring case and diacritics.
pub fn contains_standard<T, V, K>(key: K, pattern: impl Into<String>) -> On<K, Contains>
where
    T: ?Sized,
    V: ?Sized,
    K: Fn(&T) -> &V + Send + Sync,
    Contains: Predicate<V>,
{
    contains_with(key, pattern, ContainsOptions::standard())
}

/// The string field contains `pattern` under explicit options.
///
/// ```rust
/// use fieldwise::predicate::{field, ContainsOptions, Predicate};
///
/// let strict = field::contains_with(
///     |s: &String| s,
///     "",
///     ContainsOptions::ignoring_case().with_contains_empty(false),
/// );
/// assert!(!strict.check(&"text".to_string()));
/// ```
pub fn contains_with<T, V, K>(
    key: K,
    pattern: impl Into<String>,
    options: ContainsOptions,
) -> On<K, Contains>
where
    T: ?Sized,
    V: ?Sized,
    K: Fn(&T) -> &V + Send + Sync,
    Contains: Predicate<V>,
{
    On {
        key,
        predicate: Contains::new(pattern, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{some, PredicateExt};

    #[derive(Debug, Clone, PartialEq)]
    struct Track {
        title: String,
        artist: Option<String>,
        plays: u32,
        rating: Option<f32>,
        favorite: bool,
    }

    fn track(title: &str, artist: Option<&str>, plays: u32, favorite: bool) -> Track {
        Track {
            title: title.to_string(),
            artist: artist.map(str::to_string),
            plays,
            rating: None,
            favorite,
        }
    }

    fn library() -> Vec<Track> {
        vec![
            track("Clair de Lune", Some("Debussy"), 120, true),
            track("Untitled", None, 3, false),
            track("Gymnopédie No.1", Some("Satie"), 80, false),
            track("Intro", None, 45, true),
        ]
    }

    fn titles(tracks: Vec<&Track>) -> Vec<&str> {
        tracks.into_iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_presence() {
        let lib = library();
        let anonymous = is_none(|t: &Track| &t.artist).apply(&lib);
        assert_eq!(titles(anonymous), vec!["Untitled", "Intro"]);

        let credited = is_some(|t: &Track| &t.artist).apply(&lib);
        assert_eq!(titles(credited), vec!["Clair de Lune", "Gymnopédie No.1"]);
    }

    #[test]
    fn test_equality() {
        let lib = library();
        let p = eq(|t: &Track| &t.plays, 80);
        assert_eq!(titles(p.apply(&lib)), vec!["Gymnopédie No.1"]);

        let p = ne(|t: &Track| &t.plays, 80);
        assert_eq!(p.apply(&lib).len(), 3);
    }

    #[test]
    fn test_optional_equality() {
        let lib = library();
        let satie = eq_some(|t: &Track| &t.artist, "Satie".to_string());
        assert_eq!(titles(satie.apply(&lib)), vec!["Gymnopédie No.1"]);

        let not_satie = ne_some(|t: &Track| &t.artist, "Satie".to_string());
        assert_eq!(
            titles(not_satie.apply(&lib)),
            vec!["Clair de Lune", "Untitled", "Intro"]
        );

        let absent = eq(|t: &Track| &t.artist, None);
        assert_eq!(titles(absent.apply(&lib)), vec!["Untitled", "Intro"]);
    }

    #[test]
    fn test_ordering() {
        let lib = library();
        assert_eq!(titles(lt(|t: &Track| &t.plays, 45).apply(&lib)), vec!["Untitled"]);
        assert_eq!(
            titles(le(|t: &Track| &t.plays, 45).apply(&lib)),
            vec!["Untitled", "Intro"]
        );
        assert_eq!(
            titles(gt(|t: &Track| &t.plays, 80).apply(&lib)),
            vec!["Clair de Lune"]
        );
        assert_eq!(ge(|t: &Track| &t.plays, 80).apply(&lib).len(), 2);
    }

    #[test]
    fn test_optional_ordering_rejects_absent() {
        let mut lib = library();
        lib[0].rating = Some(4.5);
        lib[2].rating = Some(2.0);

        // Option's own ordering puts None below every Some.
        let loose = lt(|t: &Track| &t.rating, Some(3.0));
        assert_eq!(
            titles(loose.apply(&lib)),
            vec!["Untitled", "Gymnopédie No.1", "Intro"]
        );

        let low = lt_some(|t: &Track| &t.rating, 3.0);
        assert_eq!(titles(low.apply(&lib)), vec!["Gymnopédie No.1"]);
        assert_eq!(titles(le_some(|t: &Track| &t.rating, 2.0).apply(&lib)), vec!["Gymnopédie No.1"]);
        assert_eq!(titles(gt_some(|t: &Track| &t.rating, 3.0).apply(&lib)), vec!["Clair de Lune"]);
        assert_eq!(ge_some(|t: &Track| &t.rating, 0.0).apply(&lib).len(), 2);
        assert!(gt_some(|t: &Track| &t.rating, f32::NAN).apply(&lib).is_empty());
    }

    #[test]
    fn test_flags() {
        let lib = library();
        let favorites = is_true(|t: &Track| &t.favorite).apply(&lib);
        assert_eq!(titles(favorites), vec!["Clair de Lune", "Intro"]);
        assert_eq!(is_false(|t: &Track| &t.favorite).apply(&lib).len(), 2);
    }

    #[test]
    fn test_contains_variants() {
        let lib = library();
        assert_eq!(
            titles(contains(|t: &Track| &t.title, "Lune").apply(&lib)),
            vec!["Clair de Lune"]
        );
        assert!(contains(|t: &Track| &t.title, "lune").apply(&lib).is_empty());
        assert_eq!(
            titles(contains_ignoring_case(|t: &Track| t.title.as_str(), "LUNE").apply(&lib)),
            vec!["Clair de Lune"]
        );
        assert_eq!(
            titles(contains_standard(|t: &Track| &t.title, "gymnopedie").apply(&lib)),
            vec!["Gymnopédie No.1"]
        );
    }

    #[test]
    fn test_empty_pattern_keeps_every_track() {
        let lib = library();
        let p = contains_standard(|t: &Track| &t.title, "");
        assert_eq!(p.apply(&lib).len(), lib.len());
        assert!(p.apply(Vec::<Track>::new()).is_empty());
    }

    #[test]
    fn test_on_with_optional_ordering() {
        let mut lib = library();
        lib[0].rating = Some(4.5);
        lib[2].rating = Some(2.0);

        let well_rated = on(|t: &Track| &t.rating, some(crate::predicate::gt(3.0)));
        assert_eq!(titles(well_rated.apply(&lib)), vec!["Clair de Lune"]);
    }

    #[test]
    fn test_on_value_projection() {
        let lib = library();
        let short_titles = on_value(|t: &Track| t.title.len(), crate::predicate::lt(6));
        assert_eq!(titles(short_titles.apply(&lib)), vec!["Intro"]);
    }

    #[test]
    fn test_field_predicates_combine() {
        let lib = library();
        let p = is_true(|t: &Track| &t.favorite).and(is_some(|t: &Track| &t.artist));
        assert_eq!(titles(p.apply(&lib)), vec!["Clair de Lune"]);
    }
}
