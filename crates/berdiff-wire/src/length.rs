use crate::cursor::Cursor;
use crate::error::WireError;
use crate::mode::ParseMode;

/// The single length octet that announces an indefinite-length value.
pub const INDEFINITE_MARKER: u8 = 0x80;

/// Top bit of the first length octet: long form (or indefinite).
pub const LONG_FORM_BIT: u8 = 0x80;

/// How the length field was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthForm {
    Short,
    Long,
    Indefinite,
}

/// The decoded length.
///
/// `Unterminated` is kept apart from every numeric value: it records that
/// an indefinite length was announced but no `00 00` pair exists anywhere
/// after it. The parse engine turns it into an error when it needs a
/// content length; the length decoder itself never fails on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthValue {
    /// Short or long form: the number of content octets.
    Definite(usize),
    /// Indefinite form: content octets before the first `00 00` pair.
    Indefinite(usize),
    /// Indefinite form with no `00 00` pair in the rest of the buffer.
    Unterminated,
}

/// A length field: raw octets plus the value they decode to.
///
/// ```text
///   short:       [0x08]             → Definite(8)
///   long:        [0x82, 0x01, 0x00] → Definite(256)
///   indefinite:  [0x80]             → Indefinite(i) | Unterminated
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Length {
    raw: Vec<u8>,
    form: LengthForm,
    value: LengthValue,
}

impl Length {
    /// The length octets as encoded.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    #[must_use]
    pub fn form(&self) -> LengthForm {
        self.form
    }

    #[must_use]
    pub fn value(&self) -> LengthValue {
        self.value
    }

    /// Number of content octets, or `None` for an unterminated indefinite
    /// length.
    #[must_use]
    pub fn content_len(&self) -> Option<usize> {
        match self.value {
            LengthValue::Definite(n) | LengthValue::Indefinite(n) => Some(n),
            LengthValue::Unterminated => None,
        }
    }
}

/// Read one length field from `cursor`.
///
/// `constructed` is the flag of the tag just read: the indefinite form is
/// only recognised on constructed values. In gateway mode every first
/// octet is a short-form value, including `0x80..=0xFF`.
///
/// The indefinite form consumes only its single `0x80` octet. The search
/// for the `00 00` terminator peeks at the rest of the buffer without
/// moving the cursor.
///
/// # Errors
///
/// - [`WireError::BufferUnderrun`] if there is no length octet.
/// - [`WireError::TruncatedLength`] if a long form declares more octets
///   than remain. The offset is that of the first length octet.
pub fn decode_length(
    cursor: &mut Cursor<'_>,
    constructed: bool,
    mode: ParseMode,
) -> Result<Length, WireError> {
    let start = cursor.position();
    let first = cursor.read_byte()?;

    if first == INDEFINITE_MARKER && constructed && mode.honors_indefinite_lengths() {
        let value = match find_end_of_contents(cursor.remaining()) {
            Some(index) => {
                tracing::debug!(target: "berdiff::wire", offset = start, content_len = index, "indefinite length");
                LengthValue::Indefinite(index)
            }
            None => {
                tracing::debug!(target: "berdiff::wire", offset = start, "indefinite length without end-of-contents");
                LengthValue::Unterminated
            }
        };
        return Ok(Length {
            raw: vec![first],
            form: LengthForm::Indefinite,
            value,
        });
    }

    if first & LONG_FORM_BIT != 0 && mode.honors_long_form_lengths() {
        let declared = usize::from(first & !LONG_FORM_BIT);
        let octets = cursor
            .read(declared)
            .map_err(|_| WireError::TruncatedLength {
                offset: start,
                declared,
                available: cursor.remaining().len(),
            })?;

        // Saturates instead of wrapping: a length that does not fit in
        // usize can never be satisfied by the buffer anyway.
        let value = octets.iter().fold(0usize, |acc, &octet| {
            acc.saturating_mul(256).saturating_add(usize::from(octet))
        });
        tracing::debug!(target: "berdiff::wire", offset = start, octets = declared, value, "long-form length");

        let mut raw = Vec::with_capacity(1 + declared);
        raw.push(first);
        raw.extend_from_slice(octets);
        return Ok(Length {
            raw,
            form: LengthForm::Long,
            value: LengthValue::Definite(value),
        });
    }

    Ok(Length {
        raw: vec![first],
        form: LengthForm::Short,
        value: LengthValue::Definite(usize::from(first)),
    })
}

/// Index of the first `00 00` pair in `buf`, if any.
fn find_end_of_contents(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|pair| pair == [0x00, 0x00])
}
