use crate::cursor::Cursor;
use crate::error::WireError;
use crate::mode::ParseMode;

/// Bit 6 of the first identifier octet: set for constructed encodings.
pub const CONSTRUCTED_BIT: u8 = 0x20;

/// Low five bits of the first identifier octet all set: high-form tag.
pub const HIGH_FORM_MARKER: u8 = 0x1F;

/// Continuation bit on high-form tag number octets.
pub const CONTINUATION_BIT: u8 = 0x80;

/// The two class bits of the first identifier octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

/// A BER identifier exactly as it appeared on the wire.
///
/// The raw octets are the source of truth. Class, number and the
/// constructed flag are all derived from them on demand, so a tag that
/// was read differently by the two parse modes (one octet vs. a full
/// high-form run) keeps exactly the bytes each mode consumed.
///
/// ```text
///   first octet:  C C P N N N N N
///                 │ │ │ └────────┴── tag number, or 11111 = high form
///                 │ │ └───────────── 1 = constructed
///                 └─┴─────────────── class
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    bytes: Vec<u8>,
}

impl Tag {
    /// The identifier octets as encoded.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn first_octet(&self) -> u8 {
        self.bytes[0]
    }

    /// Whether the value is a nested sequence of TLVs.
    #[must_use]
    pub fn is_constructed(&self) -> bool {
        self.first_octet() & CONSTRUCTED_BIT != 0
    }

    #[must_use]
    pub fn class(&self) -> TagClass {
        match self.first_octet() >> 6 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        }
    }

    /// The tag number, if it fits in a `u64`.
    ///
    /// Single-octet tags yield their low five bits (so a gateway-mode tag
    /// of `0x1F` reports 31). Multi-octet tags are decoded base-128 from
    /// the continuation octets.
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        if self.bytes.len() == 1 {
            return Some(u64::from(self.first_octet() & HIGH_FORM_MARKER));
        }
        self.bytes[1..].iter().try_fold(0u64, |acc, &octet| {
            acc.checked_mul(128)?
                .checked_add(u64::from(octet & !CONTINUATION_BIT))
        })
    }

    /// Human-readable label: universal type names, bracketed numbers for
    /// the other classes (`[1]`, `[APPLICATION 3]`, `[PRIVATE 0]`).
    #[must_use]
    pub fn label(&self) -> String {
        let number = match self.number() {
            Some(n) => n.to_string(),
            None => "?".to_string(),
        };
        match self.class() {
            TagClass::Universal => match self.number().and_then(universal_name) {
                Some(name) => name.to_string(),
                None => format!("[UNIVERSAL {number}]"),
            },
            TagClass::Application => format!("[APPLICATION {number}]"),
            TagClass::ContextSpecific => format!("[{number}]"),
            TagClass::Private => format!("[PRIVATE {number}]"),
        }
    }
}

/// Names of the universal tags a byte-level viewer is likely to meet.
fn universal_name(number: u64) -> Option<&'static str> {
    let name = match number {
        0 => "END-OF-CONTENTS",
        1 => "BOOLEAN",
        2 => "INTEGER",
        3 => "BIT STRING",
        4 => "OCTET STRING",
        5 => "NULL",
        6 => "OBJECT IDENTIFIER",
        10 => "ENUMERATED",
        12 => "UTF8String",
        16 => "SEQUENCE",
        17 => "SET",
        19 => "PrintableString",
        22 => "IA5String",
        23 => "UTCTime",
        24 => "GeneralizedTime",
        _ => return None,
    };
    Some(name)
}

/// Read one identifier from `cursor`.
///
/// In standard mode a first octet with low bits `11111` is followed by
/// tag-number octets up to and including the first one without the
/// continuation bit. Gateway mode never looks past the first octet.
///
/// # Errors
///
/// - [`WireError::BufferUnderrun`] if there is no byte to read at all.
/// - [`WireError::TruncatedTag`] if a high-form tag runs off the end of
///   the buffer. The offset is that of the first identifier octet.
pub fn decode_tag(cursor: &mut Cursor<'_>, mode: ParseMode) -> Result<Tag, WireError> {
    let start = cursor.position();
    let first = cursor.read_byte()?;
    let mut bytes = vec![first];

    if mode.honors_high_form_tags() && first & HIGH_FORM_MARKER == HIGH_FORM_MARKER {
        tracing::debug!(target: "berdiff::wire", offset = start, "high-form tag");
        loop {
            let octet = cursor
                .read_byte()
                .map_err(|_| WireError::TruncatedTag { offset: start })?;
            bytes.push(octet);
            if octet & CONTINUATION_BIT == 0 {
                break;
            }
        }
    }

    Ok(Tag { bytes })
}
