//! Contextual filtering

use crate::context::{Context, Evaluated, Slot};
use crate::error::ContextError;
use crate::extent::{resolve_nonnegative, IntoExtent};
use crate::frame::FrameBuffer;
use std::mem;
use tracing::trace;

/// Keep the elements of `input` whose neighborhood satisfies `quantifier`.
///
/// Each element's context is the predicate results of the `before` elements
/// preceding it and the `after` elements following it, truncated at the
/// sequence boundaries. `predicate` runs exactly once per element; the output
/// is an order-preserving subsequence of the input. Extent validation is
/// deferred to the first advancement of the returned iterator.
pub fn contextual_filter<I, P, B, A, Q>(
    input: I,
    predicate: P,
    before: B,
    after: A,
    quantifier: Q,
) -> ContextualFilter<I::IntoIter, P, Q>
where
    I: IntoIterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
    B: IntoExtent,
    A: IntoExtent,
    Q: FnMut(Context<'_, I::Item>) -> bool,
{
    ContextualFilter {
        quantifier,
        state: State::Pending {
            input: input.into_iter(),
            predicate,
            before: before.into_extent(),
            after: after.into_extent(),
        },
    }
}

/// Lazy sequence produced by [`contextual_filter`].
pub struct ContextualFilter<I: Iterator, P: FnMut(&I::Item) -> bool, Q> {
    quantifier: Q,
    state: State<I, P>,
}

enum State<I: Iterator, P: FnMut(&I::Item) -> bool> {
    Pending {
        input: I,
        predicate: P,
        before: Result<i64, ContextError>,
        after: Result<i64, ContextError>,
    },
    Active {
        frames: FrameBuffer<Evaluated<I, P>>,
        center: usize,
    },
    Done,
}

impl<I, P> State<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    /// Resolve extents and stand up the evaluation + framing chain with
    /// `size = before + after + 1` and the center slot at index `before`.
    fn activate(&mut self) -> Result<(), ContextError> {
        let state = mem::replace(self, State::Done);
        match state {
            State::Pending {
                input,
                predicate,
                before,
                after,
            } => {
                let before = resolve_nonnegative(before)?;
                let after = resolve_nonnegative(after)?;
                let size = before + after + 1;
                trace!(before, after, size, "Contextual window active");
                *self = State::Active {
                    frames: FrameBuffer::new(
                        Evaluated::new(input, predicate),
                        size,
                        Slot::Pad,
                        before,
                        after,
                    ),
                    center: before,
                };
                Ok(())
            }
            other => {
                *self = other;
                Ok(())
            }
        }
    }
}

impl<I, P, Q> Iterator for ContextualFilter<I, P, Q>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
    Q: FnMut(Context<'_, I::Item>) -> bool,
{
    type Item = Result<I::Item, ContextError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let State::Pending { .. } = self.state {
            if let Err(err) = self.state.activate() {
                return Some(Err(err));
            }
        }
        let State::Active { frames, center } = &mut self.state else {
            return None;
        };
        let center = *center;
        while let Some(frame) = frames.next() {
            let Some((element, _)) = frame.center(center) else {
                continue;
            };
            let element = element.clone();
            if (self.quantifier)(frame.context(center)) {
                return Some(Ok(element));
            }
        }
        self.state = State::Done;
        None
    }
}
