use crate::error::WireError;

/// Forward-reading view over an immutable byte buffer.
///
/// `Cursor` borrows the input and tracks a single read offset. Reads hand
/// back sub-slices of the original buffer, so nothing is copied until a
/// caller decides to keep the bytes.
///
/// ```text
///   buf:  [30 22 02 01 01 04 08 ...]
///                ^
///                pos = 2
///   remaining() = [02 01 01 04 08 ...]
/// ```
///
/// Invariant: `0 <= pos <= buf.len()`. A failed read leaves `pos`
/// untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Read the next `n` bytes and advance past them.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::BufferUnderrun`] if fewer than `n` bytes remain.
    /// The position does not move on failure.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let available = self.buf.len() - self.pos;
        if n > available {
            return Err(WireError::BufferUnderrun {
                offset: self.pos,
                requested: n,
                available,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    /// Read a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::BufferUnderrun`] at the end of the buffer.
    pub fn read_byte(&mut self) -> Result<u8, WireError> {
        Ok(self.read(1)?[0])
    }

    /// The unread tail of the buffer. Does not consume anything.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Move the read offset to `pos`, forwards or backwards.
    ///
    /// The parse engine only ever seeks back to the start of a value region
    /// it has already read past, so that the same bytes can be decoded a
    /// second time as nested elements.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::SeekOutOfBounds`] if `pos > len()`.
    pub fn seek(&mut self, pos: usize) -> Result<(), WireError> {
        if pos > self.buf.len() {
            return Err(WireError::SeekOutOfBounds {
                target: pos,
                len: self.buf.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    /// Current read offset from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the backing buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if the backing buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// True once every byte has been read.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.buf.len()
    }
}
