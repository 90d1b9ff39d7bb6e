//! Composable predicates over elements and their fields
//!
//! A predicate is an immutable boolean test over one element. Predicates
//! are built from closures, from the comparison helpers in this module, or
//! from field projections in [`field`], and combined with `and`, `or` and
//! `not`. [`PredicateExt::apply`] filters a sequence eagerly,
//! [`PredicateExt::filter_view`] lazily, and a [`PredicateList`] narrows a
//! sequence through several predicates in turn.
//!
//! # Example
//!
//! ```rust
//! use fieldwise::predicate::*;
//!
//! #[derive(Debug)]
//! struct Ticket {
//!     title: String,
//!     assignee: Option<String>,
//!     priority: u8,
//!     closed: bool,
//! }
//!
//! let tickets = vec![
//!     Ticket { title: "Crash on start".into(), assignee: None, priority: 1, closed: false },
//!     Ticket { title: "Typo in footer".into(), assignee: Some("mo".into()), priority: 4, closed: false },
//!     Ticket { title: "Crash in export".into(), assignee: Some("lu".into()), priority: 2, closed: true },
//! ];
//!
//! let triage = PredicateList::new()
//!     .with(field::is_false(|t: &Ticket| &t.closed))
//!     .with(field::contains_ignoring_case(|t: &Ticket| &t.title, "crash"))
//!     .with(field::le(|t: &Ticket| &t.priority, 2));
//!
//! let urgent = triage.apply(&tickets);
//! assert_eq!(urgent.len(), 1);
//! assert_eq!(urgent[0].title, "Crash on start");
//! ```

mod boxed;
mod combinators;
mod compare;
pub mod field;
mod filter;
mod list;
mod string;
mod validation;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, none_of, AllOf, And, AnyOf, NoneOf, Not, Or};

// Type erasure and compound filters
pub use boxed::{custom, BoxedPredicate};
pub use filter::FilterView;
pub use list::{filter_all, PredicateList};

// Re-export comparison predicates
pub use compare::{
    between, eq, ge, gt, le, lt, ne, some, Between, Eq, Ge, Gt, IsFalse, IsNone, IsSome,
    IsSomeAnd, IsTrue, Le, Lt, Ne,
};

// Re-export field projection
pub use field::{on, on_value, On, OnValue};

// Re-export string predicates
pub use string::{
    contains, contains_ignoring_case, contains_standard, contains_with, Contains,
    ContainsOptions, MatchMode,
};

// Re-export validation integration
pub use validation::{validate, validate_with};
