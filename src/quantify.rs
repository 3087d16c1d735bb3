//! Quantifiers
//!
//! A quantifier reduces an element's lazy [`Context`] of predicate booleans
//! to a single keep/rewrite decision. Any `FnMut(Context<'_, T>) -> bool` is
//! accepted by the combinators, so callers are free to supply their own
//! reducers (majority vote, thresholds, ...); the functions here cover the
//! common cases.

use crate::context::Context;

/// True iff every boolean in the context is true. Vacuously true on an empty
/// context, so with `before = after = 0` everything qualifies.
pub fn universal<T>(mut context: Context<'_, T>) -> bool {
    context.all(|flag| flag)
}

/// True iff at least one boolean in the context is true. Vacuously false on
/// an empty context.
pub fn existential<T>(mut context: Context<'_, T>) -> bool {
    context.any(|flag| flag)
}

/// Quantifier accepting contexts with at least `count` true booleans.
/// Short-circuits once `count` matches have been seen.
pub fn at_least<T>(count: usize) -> impl FnMut(Context<'_, T>) -> bool {
    move |context| context.filter(|flag| *flag).take(count).count() == count
}
