use berdiff_wire::ParseMode;

use crate::config::DecoderConfig;
use crate::engine::ParseOutcome;
use crate::error::DecodeError;
use crate::hex_input::decode_hex;
use crate::session::ParseSession;

/// The two readings of one input: the authoritative decoder's and the
/// gateway's.
///
/// Either side may have failed on its own; a gateway that chokes on bytes
/// the standard decoder accepts is itself a divergence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub standard: Result<ParseOutcome, DecodeError>,
    pub gateway: Result<ParseOutcome, DecodeError>,
}

impl Comparison {
    /// True when the two modes disagree about the input.
    ///
    /// ```text
    /// ┌──────────┬──────────┬───────────────────────────────────────┐
    /// │ standard │ gateway  │ diverges                              │
    /// ├──────────┼──────────┼───────────────────────────────────────┤
    /// │ Ok(a)    │ Ok(b)    │ trees or consumed byte counts differ  │
    /// │ Ok       │ Err      │ yes                                   │
    /// │ Err      │ Ok       │ yes                                   │
    /// │ Err      │ Err      │ no (both reject the input)            │
    /// └──────────┴──────────┴───────────────────────────────────────┘
    /// ```
    #[must_use]
    pub fn diverges(&self) -> bool {
        match (&self.standard, &self.gateway) {
            (Ok(standard), Ok(gateway)) => {
                standard.root != gateway.root || standard.consumed != gateway.consumed
            }
            (Ok(_), Err(_)) | (Err(_), Ok(_)) => true,
            (Err(_), Err(_)) => false,
        }
    }

    /// The outcome for `mode`.
    #[must_use]
    pub fn outcome(&self, mode: ParseMode) -> &Result<ParseOutcome, DecodeError> {
        match mode {
            ParseMode::Standard => &self.standard,
            ParseMode::Gateway => &self.gateway,
        }
    }
}

/// Parse `input` in both modes within one fresh session.
///
/// The standard run goes first; the gateway run then finds the latch
/// unset and fires it on its root node.
#[must_use]
pub fn compare(input: &[u8], config: DecoderConfig) -> Comparison {
    let mut session = ParseSession::new(config);
    let standard = session.parse(input, ParseMode::Standard);
    let gateway = session.parse(input, ParseMode::Gateway);
    Comparison { standard, gateway }
}

/// Decode hex text, then [`compare`] the two modes.
///
/// # Errors
///
/// [`DecodeError::InvalidEncoding`] if the text is not valid hex. Parse
/// failures do not surface here; they live inside the [`Comparison`].
pub fn compare_hex(text: &str, config: DecoderConfig) -> Result<Comparison, DecodeError> {
    let input = decode_hex(text)?;
    Ok(compare(&input, config))
}
