use berdiff_wire::WireError;

/// Errors that abort a parse session.
///
/// Decoding fails fast: the first error discards the partially built tree
/// and is returned to the caller with the byte offset it occurred at.
///
/// ```text
///   DecodeError
///   ├── InvalidEncoding               ← hex input rejected before parsing
///   ├── IndefiniteTerminatorNotFound  ← 0x80 length with no 00 00 after it
///   ├── ChildOverrunsParent           ← child ends past its parent's value
///   ├── MaxDepthExceeded              ← nesting deeper than the configured limit
///   └── Wire(WireError)               ← underrun, truncated tag or length
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The hex text could not be turned into bytes.
    ///
    /// `offset` is a character offset into the trimmed hex string.
    #[error("invalid hex input at character {offset}: {reason}")]
    InvalidEncoding { offset: usize, reason: String },

    /// An indefinite length was announced but the rest of the buffer holds
    /// no `00 00` end-of-contents pair.
    ///
    /// `offset` points at the `0x80` length octet.
    #[error("indefinite length at offset {offset} has no end-of-contents terminator")]
    IndefiniteTerminatorNotFound { offset: usize },

    /// A child decoded by the ordinary constructed loop ends after its
    /// parent's value region.
    ///
    /// `offset` is the child's first tag octet; `parent_end` is the first
    /// offset past the parent's declared value. Children forced by the
    /// gateway exception are exempt.
    #[error("element at offset {offset} runs past its parent's value region ending at {parent_end}")]
    ChildOverrunsParent { offset: usize, parent_end: usize },

    /// Constructed values are nested deeper than `max_depth`.
    #[error("nesting depth exceeds maximum of {max_depth} at offset {offset}")]
    MaxDepthExceeded { offset: usize, max_depth: usize },

    /// A tag, length or value read ran off the end of the buffer.
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl DecodeError {
    /// Byte offset (or hex character offset, for `InvalidEncoding`) at
    /// which the error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidEncoding { offset, .. }
            | Self::IndefiniteTerminatorNotFound { offset }
            | Self::ChildOverrunsParent { offset, .. }
            | Self::MaxDepthExceeded { offset, .. } => *offset,
            Self::Wire(inner) => inner.offset(),
        }
    }

    /// Short machine-friendly name of the error kind.
    ///
    /// Covers every [`WireError`] variant for completeness, although
    /// `SeekOutOfBounds` is unreachable from a parse.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEncoding { .. } => "InvalidEncoding",
            Self::IndefiniteTerminatorNotFound { .. } => "IndefiniteTerminatorNotFound",
            Self::ChildOverrunsParent { .. } => "ChildOverrunsParent",
            Self::MaxDepthExceeded { .. } => "MaxDepthExceeded",
            Self::Wire(WireError::BufferUnderrun { .. }) => "BufferUnderrun",
            Self::Wire(WireError::TruncatedTag { .. }) => "TruncatedTag",
            Self::Wire(WireError::TruncatedLength { .. }) => "TruncatedLength",
            Self::Wire(WireError::SeekOutOfBounds { .. }) => "SeekOutOfBounds",
        }
    }
}
