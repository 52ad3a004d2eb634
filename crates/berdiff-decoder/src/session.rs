use berdiff_wire::ParseMode;

use crate::config::DecoderConfig;
use crate::engine::{Engine, ParseOutcome};
use crate::error::DecodeError;
use crate::hex_input::decode_hex;

/// State shared by one standard run and one gateway run over the same
/// input.
///
/// The only piece of state is the gateway latch. It starts unset, is set
/// by the first node a gateway-mode run decodes, and then stays set: every
/// later node in the session, including any node of a second gateway run,
/// follows ordinary length-bounded rules. Call [`reset`](Self::reset) (or
/// start a new session) before comparing a different input.
///
/// ```rust
/// use berdiff_decoder::{DecoderConfig, ParseMode, ParseSession};
///
/// let input = [0x30, 0x02, 0x05, 0x00, 0x05, 0x00, 0x05, 0x00];
/// let mut session = ParseSession::new(DecoderConfig::default());
///
/// let standard = session.parse(&input, ParseMode::Standard).unwrap();
/// let gateway = session.parse(&input, ParseMode::Gateway).unwrap();
///
/// assert_eq!(standard.root.children().len(), 1);
/// assert_eq!(gateway.root.children().len(), 3);
/// assert!(session.gateway_exception_fired());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseSession {
    config: DecoderConfig,
    gateway_exception_fired: bool,
}

impl ParseSession {
    #[must_use]
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            gateway_exception_fired: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Whether a gateway run in this session has already taken the
    /// forced-children branch.
    #[must_use]
    pub fn gateway_exception_fired(&self) -> bool {
        self.gateway_exception_fired
    }

    /// Clear the gateway latch, starting a fresh session.
    pub fn reset(&mut self) {
        self.gateway_exception_fired = false;
    }

    /// Decode the root element of `input` in `mode`.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`] raised while decoding. The partially built tree
    /// is dropped. A failing gateway run still leaves the latch set if it
    /// got as far as the first node's value region.
    pub fn parse(&mut self, input: &[u8], mode: ParseMode) -> Result<ParseOutcome, DecodeError> {
        tracing::debug!(target: "berdiff::decoder", %mode, len = input.len(), "parse");
        Engine::new(input, mode, self.config, &mut self.gateway_exception_fired).run()
    }

    /// Decode hex text, then parse it.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidEncoding`] for malformed hex, otherwise as
    /// [`parse`](Self::parse).
    pub fn parse_hex(&mut self, text: &str, mode: ParseMode) -> Result<ParseOutcome, DecodeError> {
        let input = decode_hex(text)?;
        self.parse(&input, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_NULLS_IN_A_TWO_BYTE_SEQUENCE: [u8; 8] =
        [0x30, 0x02, 0x05, 0x00, 0x05, 0x00, 0x05, 0x00];

    #[test]
    fn standard_runs_never_touch_the_latch() {
        let mut session = ParseSession::default();
        session
            .parse(&THREE_NULLS_IN_A_TWO_BYTE_SEQUENCE, ParseMode::Standard)
            .unwrap();
        assert!(!session.gateway_exception_fired());
    }

    #[test]
    fn second_gateway_run_in_same_session_is_not_forced() {
        let mut session = ParseSession::default();
        let first = session
            .parse(&THREE_NULLS_IN_A_TWO_BYTE_SEQUENCE, ParseMode::Gateway)
            .unwrap();
        let second = session
            .parse(&THREE_NULLS_IN_A_TWO_BYTE_SEQUENCE, ParseMode::Gateway)
            .unwrap();
        assert_eq!(first.root.children().len(), 3);
        assert_eq!(second.root.children().len(), 1);
    }

    #[test]
    fn reset_rearms_the_latch() {
        let mut session = ParseSession::default();
        session
            .parse(&THREE_NULLS_IN_A_TWO_BYTE_SEQUENCE, ParseMode::Gateway)
            .unwrap();
        session.reset();
        assert!(!session.gateway_exception_fired());

        let again = session
            .parse(&THREE_NULLS_IN_A_TWO_BYTE_SEQUENCE, ParseMode::Gateway)
            .unwrap();
        assert_eq!(again.root.children().len(), 3);
    }

    #[test]
    fn only_first_node_of_gateway_run_is_forced() {
        // SEQUENCE(10) { SEQUENCE(2) { NULL }, NULL, NULL, NULL }
        // The root is forced to three children; the nested SEQUENCE is
        // decoded by its declared length and keeps a single child.
        let input = [
            0x30, 0x0A, 0x30, 0x02, 0x05, 0x00, 0x05, 0x00, 0x05, 0x00, 0x05, 0x00,
        ];
        let mut session = ParseSession::default();
        let outcome = session.parse(&input, ParseMode::Gateway).unwrap();
        let children = outcome.root.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].children().len(), 1);
        assert_eq!(outcome.consumed, 10);

        let standard = session.parse(&input, ParseMode::Standard).unwrap();
        assert_eq!(standard.root.children().len(), 4);
        assert_eq!(standard.consumed, 12);
    }

    #[test]
    fn parse_hex_rejects_bad_input_before_parsing() {
        let mut session = ParseSession::default();
        let err = session.parse_hex("30 02", ParseMode::Gateway).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEncoding { .. }));
        assert!(!session.gateway_exception_fired());
    }
}
