//! # Fieldwise
//!
//! Filtering, searching, sorting and zipping Rust sequences through field
//! projections.
//!
//! The crate is built around two pieces:
//!
//! - **Predicates** ([`predicate`]): immutable boolean tests over an element,
//!   built from closures or from field comparisons (`is_none`, `eq`, `lt`,
//!   `contains`, ...), combined with `and`/`or`/`not`, and applied to a
//!   sequence eagerly or lazily. A [`PredicateList`] narrows a sequence
//!   through several predicates in turn.
//! - **N-ary zips** ([`zip`]): [`zip3`], [`zip4`] and [`zip5`] advance three
//!   to five sequences in lockstep and stop for good at the first exhausted
//!   one.
//!
//! [`SequenceExt`] adds first/last/contains/all/count and field sorting to
//! every iterator on top of the same predicates.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldwise::prelude::*;
//!
//! struct Payment {
//!     amount: Option<u32>,
//! }
//!
//! let payments: Vec<Payment> = [Some(1), Some(2), None, None, Some(5), None, Some(7)]
//!     .into_iter()
//!     .map(|amount| Payment { amount })
//!     .collect();
//!
//! let settled = PredicateList::new().with(field::is_some(|p: &Payment| &p.amount));
//! assert_eq!(settled.apply(&payments).len(), 4);
//!
//! let small = PredicateList::new()
//!     .with(field::is_some(|p: &Payment| &p.amount))
//!     .with(on(|p: &Payment| &p.amount, some(lt(2))));
//! let amounts: Vec<_> = small.apply(&payments).iter().map(|p| p.amount).collect();
//! assert_eq!(amounts, vec![Some(1)]);
//!
//! let rows: Vec<_> = zip3([1, 1, 1], [2, 2], [3, 3, 3, 3]).collect();
//! assert_eq!(rows, vec![(1, 2, 3), (1, 2, 3)]);
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: emit `trace!` events for compound filter passes and zip
//!   termination
//! - `serde`: `Serialize`/`Deserialize` for [`MatchMode`],
//!   [`ContainsOptions`] and [`SortOrder`]
//! - `proptest`: `Arbitrary` for the same types

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod predicate;
pub mod sequence;
pub mod testing;
pub mod zip;

// Re-exports
pub use predicate::{
    BoxedPredicate, ContainsOptions, MatchMode, Predicate, PredicateExt, PredicateList,
};
pub use sequence::{SequenceExt, SortOrder};
pub use zip::{zip3, zip4, zip5, Zip3, Zip4, Zip5, ZipState};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::predicate::prelude::*;
    pub use crate::sequence::{SequenceExt, SortOrder};
    pub use crate::zip::{zip3, zip4, zip5, ZipState};
}
