//! Error paths, limits and the gateway latch, end to end.

use berdiff_decoder::{
    DecodeError, DecoderConfig, GATEWAY_FORCED_CHILDREN, ParseMode, ParseSession, compare,
    compare_hex,
};
use berdiff_tests::golden;
use berdiff_wire::WireError;

/// `levels` nested SEQUENCEs around a NULL, all short-form.
fn nested(levels: usize) -> Vec<u8> {
    let mut out = vec![0x05, 0x00];
    for _ in 0..levels {
        let len = u8::try_from(out.len()).unwrap();
        out.splice(0..0, [0x30, len]);
    }
    out
}

// ── Depth ─────────────────────────────────────────────────────────────────────

#[test]
fn nesting_at_the_limit_is_accepted() {
    let input = nested(10);
    let outcome = ParseSession::new(DecoderConfig::default().with_max_depth(10))
        .parse(&input, ParseMode::Standard)
        .unwrap();
    assert_eq!(outcome.root.depth(), 10);
    assert_eq!(outcome.consumed, input.len());
}

#[test]
fn nesting_past_the_limit_fails() {
    let err = ParseSession::new(DecoderConfig::default().with_max_depth(8))
        .parse(&nested(10), ParseMode::Standard)
        .unwrap_err();
    assert_eq!(
        err,
        DecodeError::MaxDepthExceeded {
            offset: 18,
            max_depth: 8
        }
    );
    assert_eq!(err.kind(), "MaxDepthExceeded");
}

#[test]
fn default_limit_stops_deep_inputs() {
    // 70 levels need long-form lengths once the body passes 127 bytes.
    let mut input = vec![0x05, 0x00];
    for _ in 0..70 {
        let len = input.len();
        let header: Vec<u8> = if len < 0x80 {
            vec![0x30, u8::try_from(len).unwrap()]
        } else {
            vec![0x30, 0x81, u8::try_from(len).unwrap()]
        };
        input.splice(0..0, header);
    }
    let err = ParseSession::default()
        .parse(&input, ParseMode::Standard)
        .unwrap_err();
    assert!(matches!(err, DecodeError::MaxDepthExceeded { max_depth: 64, .. }));
}

// ── Error kinds ───────────────────────────────────────────────────────────────

#[test]
fn error_kinds_and_offsets() {
    let cases: &[(&str, ParseMode, &str, usize)] = &[
        ("", ParseMode::Standard, "BufferUnderrun", 0),
        ("30", ParseMode::Standard, "BufferUnderrun", 1),
        ("0405aabb", ParseMode::Standard, "BufferUnderrun", 2),
        ("1f81", ParseMode::Standard, "TruncatedTag", 0),
        ("0482ff", ParseMode::Standard, "TruncatedLength", 1),
        ("30800201", ParseMode::Standard, "IndefiniteTerminatorNotFound", 1),
        ("3003050005", ParseMode::Gateway, "BufferUnderrun", 5),
        ("zz", ParseMode::Standard, "InvalidEncoding", 0),
    ];
    for &(hex, mode, kind, offset) in cases {
        let err = ParseSession::default().parse_hex(hex, mode).unwrap_err();
        assert_eq!(err.kind(), kind, "{hex} in {mode}");
        assert_eq!(err.offset(), offset, "{hex} in {mode}");
    }
}

// ── Declared boundaries ───────────────────────────────────────────────────────

#[test]
fn standard_stops_at_the_declared_boundary() {
    // SEQUENCE(3) holding an OCTET STRING that claims five bytes.
    let input = [0x30, 0x03, 0x04, 0x05, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE];
    let err = ParseSession::default()
        .parse(&input, ParseMode::Standard)
        .unwrap_err();
    assert_eq!(
        err,
        DecodeError::ChildOverrunsParent {
            offset: 2,
            parent_end: 5
        }
    );
    assert_eq!(err.kind(), "ChildOverrunsParent");
    assert_eq!(err.offset(), 2);
}

#[test]
fn nested_overrun_reports_the_innermost_child() {
    // SEQUENCE(6) { SEQUENCE(2) { INTEGER(3) ... } }
    let input = [0x30, 0x06, 0x30, 0x02, 0x02, 0x03, 0x01, 0x02, 0x03];
    let err = ParseSession::default()
        .parse(&input, ParseMode::Standard)
        .unwrap_err();
    assert_eq!(
        err,
        DecodeError::ChildOverrunsParent {
            offset: 4,
            parent_end: 6
        }
    );
}

#[test]
fn truncated_tag_is_a_wire_error() {
    let err = ParseSession::default()
        .parse(&[0x3F, 0x81], ParseMode::Standard)
        .unwrap_err();
    assert_eq!(err, DecodeError::Wire(WireError::TruncatedTag { offset: 0 }));
}

#[test]
fn gateway_ignores_high_form_tags() {
    // Standard reads 1f 81 as the start of a multi-octet tag and runs out.
    // The gateway reads 1f as a whole tag and 81 as a length of 129.
    let comparison = compare(&[0x1F, 0x81], DecoderConfig::default());
    assert_eq!(comparison.standard.unwrap_err().kind(), "TruncatedTag");
    assert_eq!(comparison.gateway.unwrap_err().kind(), "BufferUnderrun");
}

#[test]
fn invalid_hex_never_reaches_a_parser() {
    let err = compare_hex("30 0", DecoderConfig::default()).unwrap_err();
    assert_eq!(err.kind(), "InvalidEncoding");
}

// ── Gateway latch ─────────────────────────────────────────────────────────────

#[test]
fn latch_fires_once_per_session() {
    let input = golden("null_triplet");
    let mut session = ParseSession::default();

    let first = session.parse(&input, ParseMode::Gateway).unwrap();
    assert_eq!(first.root.children().len(), GATEWAY_FORCED_CHILDREN);
    assert_eq!(first.consumed, 8);

    let second = session.parse(&input, ParseMode::Gateway).unwrap();
    assert_eq!(second.root.children().len(), 1);
    assert_eq!(second.consumed, 4);

    session.reset();
    let third = session.parse(&input, ParseMode::Gateway).unwrap();
    assert_eq!(third.root, first.root);
}

#[test]
fn standard_runs_leave_the_latch_alone() {
    let mut session = ParseSession::default();
    for _ in 0..3 {
        session
            .parse(&golden("standard"), ParseMode::Standard)
            .unwrap();
    }
    assert!(!session.gateway_exception_fired());
}

#[test]
fn a_failed_gateway_run_still_spends_the_latch() {
    let mut session = ParseSession::default();
    session
        .parse(&[0x30, 0x02, 0x05, 0x00], ParseMode::Gateway)
        .unwrap_err();
    assert!(session.gateway_exception_fired());

    let outcome = session
        .parse(&[0x30, 0x02, 0x05, 0x00], ParseMode::Gateway)
        .unwrap();
    assert_eq!(outcome.root.children().len(), 1);
}

#[test]
fn every_comparison_starts_fresh() {
    let input = golden("null_triplet");
    let first = compare(&input, DecoderConfig::default());
    let second = compare(&input, DecoderConfig::default());
    assert_eq!(first, second);
    assert!(first.diverges());
}
