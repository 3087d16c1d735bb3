//! Contextual combinators
//!
//! Filtering and mapping where each element's fate is decided by a quantifier
//! over its neighborhood. Both combinators share the same pipeline: elements
//! are paired with their predicate result exactly once as they are pulled,
//! the pairs are framed into windows of `before + after + 1` slots with
//! padded boundaries, and the non-center, non-pad slots of each window form
//! the element's [`Context`].
//!
//! Padding is a [`Slot`] variant rather than a sentinel value, so no
//! caller-supplied element can ever be mistaken for a boundary slot.

mod evaluate;
mod filter;
mod map;

pub use filter::{contextual_filter, ContextualFilter};
pub use map::{contextual_map, ContextualMap};

pub(crate) use evaluate::Evaluated;

use crate::frame::Frame;

/// One window slot of the combinator pipeline: a real element paired with its
/// predicate result, or synthetic boundary padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot<T> {
    Live(T),
    Pad,
}

/// Lazy view of an element's neighborhood: the predicate results of every
/// non-center, non-pad slot of its frame, in window order.
///
/// A `Context` is handed to the quantifier and yields between `0` booleans
/// (at sequence boundaries with large extents, or when `before = after = 0`)
/// and `before + after` booleans (mid-sequence).
pub struct Context<'a, T> {
    slots: &'a [Slot<(T, bool)>],
    center: usize,
    pos: usize,
}

impl<'a, T> Iterator for Context<'a, T> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        while self.pos < self.slots.len() {
            let index = self.pos;
            self.pos += 1;
            if index == self.center {
                continue;
            }
            if let Slot::Live((_, flag)) = &self.slots[index] {
                return Some(*flag);
            }
        }
        None
    }
}

impl<T> Frame<Slot<(T, bool)>> {
    /// The element under evaluation. The center slot of a full frame always
    /// holds a real element, never padding.
    pub(crate) fn center(&self, center: usize) -> Option<&(T, bool)> {
        match &self.slots()[center] {
            Slot::Live(pair) => Some(pair),
            Slot::Pad => None,
        }
    }

    /// The neighborhood of the center slot.
    pub(crate) fn context(&self, center: usize) -> Context<'_, T> {
        Context {
            slots: self.slots(),
            center,
            pos: 0,
        }
    }
}
