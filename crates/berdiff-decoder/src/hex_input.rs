use crate::error::DecodeError;

/// Turn hex text into bytes.
///
/// Digits are case-insensitive and must come in pairs. Leading and
/// trailing whitespace is ignored (a pasted line usually ends in a
/// newline); whitespace between digits is not.
///
/// # Errors
///
/// [`DecodeError::InvalidEncoding`] for an odd number of digits or any
/// non-hex character. The offset is a byte offset into the trimmed text.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = text.trim();
    hex::decode(trimmed).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => DecodeError::InvalidEncoding {
            offset: index,
            reason: format!("invalid hex character {c:?}"),
        },
        hex::FromHexError::OddLength => DecodeError::InvalidEncoding {
            offset: trimmed.len(),
            reason: "odd number of hex digits".to_string(),
        },
        other => DecodeError::InvalidEncoding {
            offset: 0,
            reason: other.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_case() {
        assert_eq!(decode_hex("30aBcD").unwrap(), vec![0x30, 0xAB, 0xCD]);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(decode_hex("  0500\n").unwrap(), vec![0x05, 0x00]);
    }

    #[test]
    fn empty_text_is_empty_input() {
        assert!(decode_hex("").unwrap().is_empty());
    }

    #[test]
    fn odd_length() {
        assert_eq!(
            decode_hex("305"),
            Err(DecodeError::InvalidEncoding {
                offset: 3,
                reason: "odd number of hex digits".to_string(),
            })
        );
    }

    #[test]
    fn non_hex_character() {
        let err = decode_hex("30zz").unwrap_err();
        assert_eq!(err.offset(), 2);
        assert_eq!(err.kind(), "InvalidEncoding");
    }

    #[test]
    fn inner_whitespace_is_rejected() {
        assert!(matches!(
            decode_hex("30 22"),
            Err(DecodeError::InvalidEncoding { .. })
        ));
    }
}
