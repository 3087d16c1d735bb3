//! Integer coercion for window extents
//!
//! The framing operations accept their `size`, `before`, and `after`
//! parameters as anything coercible to an integer, mirroring a loosely typed
//! call surface while keeping the failure modes distinct: a value with no
//! integer interpretation at all (`NotInteger`) versus text that merely fails
//! to parse (`MalformedInteger`). Coercion results are held by the returned
//! iterators and surfaced on first advancement, never at construction.

use crate::error::ContextError;

/// Conversion of a caller-supplied window extent into an integer.
pub trait IntoExtent {
    /// Coerce the value to an `i64` extent.
    fn into_extent(self) -> Result<i64, ContextError>;
}

macro_rules! impl_into_extent {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoExtent for $ty {
            fn into_extent(self) -> Result<i64, ContextError> {
                i64::try_from(self)
                    .map_err(|_| ContextError::NotInteger(format!("out-of-range integer {}", self)))
            }
        }
    )*};
}

impl_into_extent!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoExtent for &str {
    fn into_extent(self) -> Result<i64, ContextError> {
        self.trim()
            .parse::<i64>()
            .map_err(|_| ContextError::MalformedInteger(self.to_string()))
    }
}

impl IntoExtent for String {
    fn into_extent(self) -> Result<i64, ContextError> {
        self.as_str().into_extent()
    }
}

/// `None` plays the role of an absent extent and is a type error, matching
/// the distinction between "wrong kind of value" and "unparsable text".
impl<E: IntoExtent> IntoExtent for Option<E> {
    fn into_extent(self) -> Result<i64, ContextError> {
        match self {
            Some(value) => value.into_extent(),
            None => Err(ContextError::NotInteger("absent value".to_string())),
        }
    }
}

/// Resolve a deferred coercion into a non-negative context length.
pub(crate) fn resolve_nonnegative(
    raw: Result<i64, ContextError>,
) -> Result<usize, ContextError> {
    let value = raw?;
    usize::try_from(value).map_err(|_| ContextError::NegativeExtent(value))
}
