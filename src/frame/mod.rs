//! Window frames
//!
//! A [`Frame`] is an immutable fixed-length snapshot of consecutive (possibly
//! padded) slots produced by sliding a window over a sequence. Frames are
//! emitted by [`frame`] and consumed internally by the contextual combinators.

mod buffer;
mod framer;

pub(crate) use buffer::FrameBuffer;
pub use framer::{frame, frame_default, Frames};

use std::ops::Index;

/// Immutable snapshot of one window position.
///
/// Every frame produced by a single framing pass has the same length, the
/// `size` the pass was configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<T> {
    slots: Box<[T]>,
}

impl<T> Frame<T> {
    pub(crate) fn from_slots(slots: Box<[T]>) -> Self {
        Self { slots }
    }

    /// Number of slots in the frame.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the frame has no slots. Frames emitted by this crate always
    /// have at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in window order.
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// Slot at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }
}

impl<T> Index<usize> for Frame<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IntoIterator for Frame<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Frame<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
