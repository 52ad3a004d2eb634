/// Errors raised while reading tags, lengths and raw value bytes.
///
/// Every variant carries the byte offset (from the start of the input) at
/// which the problem was detected, so a caller can point at the offending
/// byte in an annotated hex dump.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A read asked for more bytes than remain in the buffer.
    #[error("buffer underrun at offset {offset}: requested {requested} bytes, {available} available")]
    BufferUnderrun {
        offset: usize,
        requested: usize,
        available: usize,
    },

    /// A high-form tag ran off the end of the buffer before an octet
    /// without the continuation bit was seen.
    #[error("truncated high-form tag starting at offset {offset}")]
    TruncatedTag { offset: usize },

    /// A long-form length declared more length octets than remain.
    #[error("truncated long-form length at offset {offset}: {declared} length octets declared, {available} available")]
    TruncatedLength {
        offset: usize,
        declared: usize,
        available: usize,
    },

    /// A seek targeted a position outside `[0, len]`.
    ///
    /// Only direct [`Cursor::seek`](crate::Cursor::seek) callers can see
    /// this. The parse engine seeks back to value regions it has already
    /// read past, so a decode never fails with it.
    #[error("seek to {target} is outside the buffer (length {len})")]
    SeekOutOfBounds { target: usize, len: usize },
}

impl WireError {
    /// Byte offset at which the error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::BufferUnderrun { offset, .. }
            | Self::TruncatedTag { offset }
            | Self::TruncatedLength { offset, .. } => *offset,
            Self::SeekOutOfBounds { target, .. } => *target,
        }
    }
}

// The offset on BufferUnderrun is the cursor position at the failed read,
// not the start of the element being decoded. TruncatedTag and
// TruncatedLength instead point at the first octet of their field.
