//! Lockstep zips over three, four and five sequences
//!
//! [`zip3`], [`zip4`] and [`zip5`] generalize [`Iterator::zip`]: each step
//! advances every source once and yields the tuple of their elements. The
//! first time any source runs dry the zip moves to [`ZipState::Ended`] and
//! stays there.
//!
//! # Consumption on the final step
//!
//! Sources are advanced in argument order and a step stops at the first
//! exhausted source. Sources ahead of it in that step have already given up
//! an element, which is dropped. Collections are unaffected (build a new
//! zip from them to traverse again); shared single-pass iterators passed by
//! `&mut` will have lost that element.
//!
//! # Traversal
//!
//! A zip owns its source cursors, so one zip value is one traversal. When
//! every cursor is `Clone`, cloning the zip gives an independent traversal
//! from the current position.
//!
//! # Example
//!
//! ```rust
//! use fieldwise::zip::zip3;
//!
//! let names = ["ant", "bee", "cat"];
//! let legs = [6, 6];
//! let wings = vec![false, true, false, true];
//!
//! let rows: Vec<_> = zip3(names, legs, wings).collect();
//! assert_eq!(rows, vec![("ant", 6, false), ("bee", 6, true)]);
//! ```

use std::iter::FusedIterator;

/// Lifecycle of an n-ary zip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZipState {
    /// No source has been observed exhausted yet.
    #[default]
    Active,
    /// A source ran out; the zip yields nothing further.
    Ended,
}

type SizeHint = (usize, Option<usize>);

#[inline]
fn merge_hints(acc: SizeHint, next: SizeHint) -> SizeHint {
    let lower = acc.0.min(next.0);
    let upper = match (acc.1, next.1) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (bound, None) | (None, bound) => bound,
    };
    (lower, upper)
}

#[inline]
fn trace_end(arity: usize, exhausted: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(arity, exhausted, "zip ended");
    #[cfg(not(feature = "tracing"))]
    let _ = (arity, exhausted);
}

macro_rules! zip_n {
    (
        $(#[$doc:meta])*
        $name:ident, $ctor:ident, $arity:literal;
        $($idx:tt $src:ident $field:ident),+
    ) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        #[must_use = "iterators are lazy and do nothing unless consumed"]
        pub struct $name<$($src),+> {
            $($field: $src,)+
            state: ZipState,
        }

        impl<$($src: Iterator),+> $name<$($src),+> {
            /// Zip the given iterators.
            pub fn new($($field: $src),+) -> Self {
                Self {
                    $($field,)+
                    state: ZipState::Active,
                }
            }

            /// Current lifecycle state.
            pub fn state(&self) -> ZipState {
                self.state
            }

            /// Whether a source has been exhausted.
            pub fn is_ended(&self) -> bool {
                self.state == ZipState::Ended
            }

            /// Cheap lower bound on the tuples left: the smallest lower
            /// bound among the sources, or zero once ended.
            pub fn underestimated_count(&self) -> usize {
                self.size_hint().0
            }
        }

        impl<$($src: Iterator),+> Iterator for $name<$($src),+> {
            type Item = ($($src::Item,)+);

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                if self.state == ZipState::Ended {
                    return None;
                }
                $(
                    let Some($field) = self.$field.next() else {
                        self.state = ZipState::Ended;
                        trace_end($arity, $idx);
                        return None;
                    };
                )+
                Some(($($field,)+))
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                if self.state == ZipState::Ended {
                    return (0, Some(0));
                }
                let hint = (usize::MAX, None);
                $(let hint = merge_hints(hint, self.$field.size_hint());)+
                hint
            }
        }

        impl<$($src: Iterator),+> FusedIterator for $name<$($src),+> {}

        impl<$($src: ExactSizeIterator),+> ExactSizeIterator for $name<$($src),+> {}

        $(#[$doc])*
        pub fn $ctor<$($src: IntoIterator),+>($($field: $src),+) -> $name<$($src::IntoIter),+> {
            $name::new($($field.into_iter()),+)
        }
    };
}

zip_n!(
    /// Three sequences advanced in lockstep.
    Zip3, zip3, 3;
    0 A a, 1 B b, 2 C c
);

zip_n!(
    /// Four sequences advanced in lockstep.
    Zip4, zip4, 4;
    0 A a, 1 B b, 2 C c, 3 D d
);

zip_n!(
    /// Five sequences advanced in lockstep.
    Zip5, zip5, 5;
    0 A a, 1 B b, 2 C c, 3 D d, 4 E e
);
