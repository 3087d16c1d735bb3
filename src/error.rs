//! Error types for the contextual windowing pipeline.

use thiserror::Error;

/// Errors surfaced while traversing a windowed pipeline.
///
/// Construction of `frame`, `contextual_filter`, and `contextual_map` is
/// infallible; invalid window extents are reported on the first advancement
/// of the returned iterator. Once an error has been yielded the iterator is
/// exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The extent value has no meaningful integer coercion (e.g. an absent
    /// value, or an unsigned value outside the representable range).
    #[error("Extent is not an integer: {0}")]
    NotInteger(String),

    /// The extent was given as text that does not parse as an integer.
    #[error("Extent is not a well-formed integer: {0:?}")]
    MalformedInteger(String),

    /// `before` and `after` describe context lengths and must be >= 0.
    #[error("Extent must be non-negative, got {0}")]
    NegativeExtent(i64),
}
