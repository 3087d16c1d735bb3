//! Public framing operation
//!
//! [`frame`] returns immediately without touching its arguments; extent
//! validation and input consumption both happen on the first advancement of
//! the returned [`Frames`] iterator. A pipeline that is constructed but never
//! consumed therefore observes no error, and a non-positive `size` yields an
//! empty sequence without inspecting `before` or `after` at all.

use crate::error::ContextError;
use crate::extent::{resolve_nonnegative, IntoExtent};
use crate::frame::{Frame, FrameBuffer};
use std::mem;
use tracing::trace;

/// Slide a window of `size` slots over `input`, padding both boundaries.
///
/// `before` and `after` synthetic copies of `pad` are logically prepended and
/// appended to the input before sliding. For a finite input of length `n` the
/// result holds `max(0, n + before + after - size + 1)` frames; for unbounded
/// inputs frames are emitted online with O(`size`) memory.
pub fn frame<I, S, B, A>(input: I, size: S, pad: I::Item, before: B, after: A) -> Frames<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
    S: IntoExtent,
    B: IntoExtent,
    A: IntoExtent,
{
    Frames {
        state: State::Pending {
            input: input.into_iter(),
            pad,
            size: size.into_extent(),
            before: before.into_extent(),
            after: after.into_extent(),
        },
    }
}

/// [`frame`] padding with the element type's default value.
pub fn frame_default<I, S, B, A>(input: I, size: S, before: B, after: A) -> Frames<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone + Default,
    S: IntoExtent,
    B: IntoExtent,
    A: IntoExtent,
{
    frame(input, size, I::Item::default(), before, after)
}

/// Lazy sequence of window frames produced by [`frame`].
pub struct Frames<I: Iterator> {
    state: State<I>,
}

enum State<I: Iterator> {
    /// Not yet advanced; extent coercions are held, not surfaced.
    Pending {
        input: I,
        pad: I::Item,
        size: Result<i64, ContextError>,
        before: Result<i64, ContextError>,
        after: Result<i64, ContextError>,
    },
    Active(FrameBuffer<I>),
    Done,
}

impl<I> Frames<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Validate extents and stand up the sliding buffer. Leaves the state
    /// `Done` when `size` is non-positive or validation fails.
    fn activate(&mut self) -> Result<(), ContextError> {
        let state = mem::replace(&mut self.state, State::Done);
        match state {
            State::Pending {
                input,
                pad,
                size,
                before,
                after,
            } => {
                let size = size?;
                if size <= 0 {
                    // Non-positive size short-circuits all other validation.
                    return Ok(());
                }
                let before = resolve_nonnegative(before)?;
                let after = resolve_nonnegative(after)?;
                trace!(size, before, after, "Window framer active");
                self.state = State::Active(FrameBuffer::new(
                    input,
                    size as usize,
                    pad,
                    before,
                    after,
                ));
                Ok(())
            }
            other => {
                self.state = other;
                Ok(())
            }
        }
    }
}

impl<I> Iterator for Frames<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Result<Frame<I::Item>, ContextError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let State::Pending { .. } = self.state {
            if let Err(err) = self.activate() {
                return Some(Err(err));
            }
        }
        match &mut self.state {
            State::Active(buffer) => buffer.next().map(Ok),
            _ => None,
        }
    }
}
