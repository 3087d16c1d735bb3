//! Fixed-capacity sliding buffer
//!
//! The resolved core of the windowing engine: extents are already validated by
//! the time a `FrameBuffer` exists, so iteration here is infallible. The
//! buffer pulls from a leading-pads / input / trailing-pads chain one item at
//! a time and emits an immutable snapshot whenever it holds exactly `size`
//! items, evicting the oldest slot before accepting the next. Memory stays at
//! O(size) for arbitrarily long inputs and frames are emitted online as soon
//! as they fill.

use crate::frame::Frame;
use std::collections::VecDeque;

pub(crate) struct FrameBuffer<I: Iterator> {
    input: I,
    pad: I::Item,
    size: usize,
    leading: usize,
    trailing: usize,
    exhausted: bool,
    buf: VecDeque<I::Item>,
}

impl<I> FrameBuffer<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Invariant: `size > 0`; callers resolve extents before constructing.
    pub(crate) fn new(input: I, size: usize, pad: I::Item, before: usize, after: usize) -> Self {
        debug_assert!(size > 0);
        Self {
            input,
            pad,
            size,
            leading: before,
            trailing: after,
            exhausted: false,
            buf: VecDeque::with_capacity(size),
        }
    }

    /// Next item of the augmented sequence: pads, then input, then pads.
    fn pull(&mut self) -> Option<I::Item> {
        if self.leading > 0 {
            self.leading -= 1;
            return Some(self.pad.clone());
        }
        if !self.exhausted {
            match self.input.next() {
                Some(item) => return Some(item),
                None => self.exhausted = true,
            }
        }
        if self.trailing > 0 {
            self.trailing -= 1;
            return Some(self.pad.clone());
        }
        None
    }
}

impl<I> Iterator for FrameBuffer<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Frame<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.pull() {
            if self.buf.len() == self.size {
                self.buf.pop_front();
            }
            self.buf.push_back(item);
            if self.buf.len() == self.size {
                return Some(Frame::from_slots(self.buf.iter().cloned().collect()));
            }
        }
        None
    }
}
