//! Contextual mapping

use crate::context::{Context, Evaluated, Slot};
use crate::error::ContextError;
use crate::extent::{resolve_nonnegative, IntoExtent};
use crate::frame::FrameBuffer;
use std::mem;
use tracing::trace;

/// Rewrite the elements of `input` whose neighborhood satisfies `quantifier`.
///
/// Context computation is identical to [`contextual_filter`]; the difference
/// is that every element is yielded: `mapping(element)` when the quantifier
/// accepts its context, the untouched element otherwise. Output length always
/// equals input length and order is preserved.
///
/// [`contextual_filter`]: crate::context::contextual_filter
pub fn contextual_map<I, M, P, B, A, Q>(
    input: I,
    mapping: M,
    predicate: P,
    before: B,
    after: A,
    quantifier: Q,
) -> ContextualMap<I::IntoIter, M, P, Q>
where
    I: IntoIterator,
    I::Item: Clone,
    M: FnMut(I::Item) -> I::Item,
    P: FnMut(&I::Item) -> bool,
    B: IntoExtent,
    A: IntoExtent,
    Q: FnMut(Context<'_, I::Item>) -> bool,
{
    ContextualMap {
        mapping,
        quantifier,
        state: State::Pending {
            input: input.into_iter(),
            predicate,
            before: before.into_extent(),
            after: after.into_extent(),
        },
    }
}

/// Lazy sequence produced by [`contextual_map`].
pub struct ContextualMap<I: Iterator, M, P: FnMut(&I::Item) -> bool, Q> {
    mapping: M,
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

impl<I, M, P, Q> Iterator for ContextualMap<I, M, P, Q>
where
    I: Iterator,
    I::Item: Clone,
    M: FnMut(I::Item) -> I::Item,
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
            let matched = (self.quantifier)(frame.context(center));
            return Some(Ok(if matched {
                (self.mapping)(element)
            } else {
                element
            }));
        }
        self.state = State::Done;
        None
    }
}
