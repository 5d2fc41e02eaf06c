//! Checked-access errors for term collections.

/// Error returned by the checked accessors of [`BytesRefs`](crate::BytesRefs).
///
/// The unchecked primitives (`less`, `swap`) panic with the same message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Position outside `[0, len)`.
    #[error("index {index} out of bounds for collection of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

impl IndexError {
    /// Validate `index` against a collection of length `len`.
    #[inline]
    pub(crate) fn check(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(IndexError::OutOfBounds { index, len })
        }
    }
}
