//! Contextual: Context-Aware Sequence Transformation
//!
//! Lazy, pull-based filtering and mapping of sequences where the decision for
//! each element depends on a sliding window of its neighbors. The windowing
//! engine frames an input sequence into fixed-size overlapping snapshots with
//! synthetic padding at the boundaries; the combinators evaluate a predicate
//! exactly once per element and let a caller-supplied quantifier reduce each
//! element's neighborhood to a keep/rewrite decision.
//!
//! Nothing is materialized eagerly: every stage is an iterator that advances
//! only when its consumer pulls, and dropping a pipeline cancels all upstream
//! work.

pub mod context;
pub mod error;
pub mod extent;
pub mod frame;
pub mod quantify;

pub use context::{contextual_filter, contextual_map, Context, ContextualFilter, ContextualMap};
pub use error::ContextError;
pub use extent::IntoExtent;
pub use frame::{frame, frame_default, Frame, Frames};
