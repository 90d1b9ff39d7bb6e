//! String containment predicates
//!
//! Substring search in three strengths:
//!
//! - [`MatchMode::Exact`]: plain `str::contains`
//! - [`MatchMode::CaseInsensitive`]: both sides lowercased (full Unicode
//!   case mapping)
//! - [`MatchMode::Standard`]: case- and diacritic-insensitive; both sides
//!   are transliterated to ASCII with `deunicode` and lowercased, so
//!   `"Crème Brûlée"` contains `"creme"`
//!
//! # Empty patterns
//!
//! [`ContainsOptions::contains_empty`] (on by default) makes an empty
//! pattern accept every string. With it off, an empty pattern goes through
//! the normal search: an exact search still finds it everywhere, while the
//! folding modes report no match, the same answer a locale-aware range
//! search gives for an empty needle.

use std::borrow::Cow;

use deunicode::deunicode;

use super::combinators::Predicate;

/// How a substring search compares characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchMode {
    /// Byte-for-byte substring search.
    #[default]
    Exact,
    /// Search ignoring letter case.
    CaseInsensitive,
    /// Search ignoring letter case and diacritics.
    Standard,
}

impl MatchMode {
    fn fold(self, text: &str) -> Cow<'_, str> {
        match self {
            MatchMode::Exact => Cow::Borrowed(text),
            MatchMode::CaseInsensitive => Cow::Owned(text.to_lowercase()),
            MatchMode::Standard => Cow::Owned(deunicode(text).to_lowercase()),
        }
    }
}

/// Settings for a [`Contains`] predicate.
///
/// # Example
///
/// ```rust
/// use fieldwise::predicate::{ContainsOptions, MatchMode};
///
/// let options = ContainsOptions::ignoring_case().with_contains_empty(false);
/// assert_eq!(options.mode, MatchMode::CaseInsensitive);
/// assert!(!options.contains_empty);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContainsOptions {
    /// Character comparison strength.
    pub mode: MatchMode,
    /// Whether an empty pattern matches every string unconditionally.
    pub contains_empty: bool,
}

impl Default for ContainsOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::Exact,
            contains_empty: true,
        }
    }
}

impl ContainsOptions {
    /// Exact search, empty pattern matches everything.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Case-insensitive search, empty pattern matches everything.
    pub fn ignoring_case() -> Self {
        Self::default().with_mode(MatchMode::CaseInsensitive)
    }

    /// Case- and diacritic-insensitive search, empty pattern matches
    /// everything.
    pub fn standard() -> Self {
        Self::default().with_mode(MatchMode::Standard)
    }

    /// Set the match mode.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the empty-pattern policy.
    pub fn with_contains_empty(mut self, contains_empty: bool) -> Self {
        self.contains_empty = contains_empty;
        self
    }
}

/// Predicate that checks if a string contains a pattern.
#[derive(Clone, Debug)]
pub struct Contains {
    pattern: String,
    // pattern folded for `options.mode`, computed once
    needle: String,
    options: ContainsOptions,
}

impl Contains {
    /// Build a containment test for `pattern` with the given options.
    pub fn new(pattern: impl Into<String>, options: ContainsOptions) -> Self {
        let pattern = pattern.into();
        let needle = options.mode.fold(&pattern).into_owned();
        Self {
            pattern,
            needle,
            options,
        }
    }

    /// The pattern as given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The options in effect.
    pub fn options(&self) -> ContainsOptions {
        self.options
    }

    fn matches(&self, haystack: &str) -> bool {
        if self.pattern.is_empty() && self.options.contains_empty {
            return true;
        }
        match self.options.mode {
            MatchMode::Exact => haystack.contains(self.pattern.as_str()),
            mode => {
                !self.needle.is_empty() && mode.fold(haystack).contains(self.needle.as_str())
            }
        }
    }
}

impl Predicate<str> for Contains {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.matches(value)
    }
}

impl Predicate<String> for Contains {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.matches(value)
    }
}

/// Create an exact substring predicate.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert!(contains("@").check("user@example.com"));
/// assert!(!contains("@").check("invalid"));
/// assert!(contains("").check("anything"));
/// ```
pub fn contains(pattern: impl Into<String>) -> Contains {
    Contains::new(pattern, ContainsOptions::exact())
}

/// Create a case-insensitive substring predicate.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert!(contains_ignoring_case("RUST").check("Trusty"));
/// ```
pub fn contains_ignoring_case(pattern: impl Into<String>) -> Contains {
    Contains::new(pattern, ContainsOptions::ignoring_case())
}

/// Create a case- and diacritic-insensitive substring predicate.
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert!(contains_standard("cafe").check("Le Café"));
/// ```
pub fn contains_standard(pattern: impl Into<String>) -> Contains {
    Contains::new(pattern, ContainsOptions::standard())
}

/// Create a substring predicate with explicit options.
pub fn contains_with(pattern: impl Into<String>, options: ContainsOptions) -> Contains {
    Contains::new(pattern, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_is_case_sensitive() {
        assert!(contains("ell").check("hello"));
        assert!(!contains("ELL").check("hello"));
    }

    #[test]
    fn test_ignoring_case() {
        let p = contains_ignoring_case("ELL");
        assert!(p.check("hello"));
        assert!(p.check("HELLO"));
        assert!(!p.check("help"));
    }

    #[test]
    fn test_ignoring_case_handles_non_ascii() {
        assert!(contains_ignoring_case("ÉCOLE").check("une école"));
        assert!(!contains_ignoring_case("ecole").check("une école"));
    }

    #[test]
    fn test_standard_ignores_diacritics() {
        let p = contains_standard("creme brulee");
        assert!(p.check("Crème Brûlée"));
        assert!(contains_standard("Zoë").check("zoe saldana"));
        assert!(!contains_standard("cafe").check("coffee"));
    }

    #[test]
    fn test_empty_pattern_matches_everything_by_default() {
        for p in [
            contains(""),
            contains_ignoring_case(""),
            contains_standard(""),
        ] {
            assert!(p.check(""));
            assert!(p.check("anything"));
        }
    }

    #[test]
    fn test_empty_pattern_opt_out() {
        let exact = contains_with("", ContainsOptions::exact().with_contains_empty(false));
        assert!(exact.check("anything"));
        assert!(exact.check(""));

        let folded = contains_with(
            "",
            ContainsOptions::ignoring_case().with_contains_empty(false),
        );
        assert!(!folded.check("anything"));
        assert!(!folded.check(""));

        let standard = contains_with("", ContainsOptions::standard().with_contains_empty(false));
        assert!(!standard.check("anything"));
    }

    #[test]
    fn test_opt_out_does_not_change_non_empty_patterns() {
        let p = contains_with(
            "Ab",
            ContainsOptions::ignoring_case().with_contains_empty(false),
        );
        assert!(p.check("cab"));
        assert!(!p.check("cba"));
    }

    #[test]
    fn test_string_and_str_agree() {
        let p = contains("needle");
        let owned = String::from("haystack with needle");
        assert!(Predicate::<String>::check(&p, &owned));
        assert!(Predicate::<str>::check(&p, owned.as_str()));
    }

    #[test]
    fn test_accessors() {
        let p = contains_standard("Hé");
        assert_eq!(p.pattern(), "Hé");
        assert_eq!(p.options(), ContainsOptions::standard());
    }
}
