//! Predicate evaluation stage
//!
//! Pairs each element with its predicate result as it is first pulled into a
//! frame. An element appears in up to `before + after + 1` overlapping frames
//! but the predicate runs exactly once per element; the pair is cloned into
//! frames, never re-evaluated. Predicates may be stateful or expensive, so
//! exactly-once invocation is part of the contract, not an optimization.

use crate::context::Slot;

pub(crate) struct Evaluated<I, P> {
    input: I,
    predicate: P,
}

impl<I, P> Evaluated<I, P> {
    pub(crate) fn new(input: I, predicate: P) -> Self {
        Self { input, predicate }
    }
}

impl<I, P> Iterator for Evaluated<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Slot<(I::Item, bool)>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.input.next()?;
        let flag = (self.predicate)(&item);
        Some(Slot::Live((item, flag)))
    }
}
