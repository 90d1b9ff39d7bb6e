//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//! Field constructors stay behind the `field` module path, since their names
//! overlap with the value comparisons.
//!
//! # Example
//!
//! ```rust
//! use fieldwise::predicate::prelude::*;
//!
//! let adult = field::ge(|age: &u8| age, 18);
//! assert_eq!(adult.apply(vec![12, 30, 18]), vec![30, 18]);
//! ```

// Core traits
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, none_of, And, Not, Or};

// Boxing and compound filters
pub use super::boxed::{custom, BoxedPredicate};
pub use super::list::{filter_all, PredicateList};

// Comparisons and projection
pub use super::compare::{between, eq, ge, gt, le, lt, ne, some};
pub use super::field::{self, on, on_value};

// String predicates
pub use super::string::{
    contains, contains_ignoring_case, contains_standard, contains_with, ContainsOptions, MatchMode,
};

// Validation integration
pub use super::validation::{validate, validate_with};
