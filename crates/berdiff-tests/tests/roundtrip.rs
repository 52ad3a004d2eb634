//! Every node of every tree re-encodes to exactly the input bytes it
//! claims, in both modes, whatever lengths it declared.

use berdiff_decoder::{DecoderConfig, Node, ParseMode, compare};
use berdiff_render::ByteGroupRenderer;
use berdiff_tests::golden;

fn assert_spans_round_trip(input: &[u8], root: &Node, mode: ParseMode) {
    for node in root.preorder() {
        assert_eq!(
            node.encoded_bytes(),
            &input[node.span()],
            "{mode} node {} at {:?}",
            node.tag.label(),
            node.span()
        );
        for child in node.children() {
            assert!(child.start >= node.value_start(), "{mode} child starts inside parent header");
        }
        if let [.., last] = node.children() {
            assert_eq!(last.end, node.end, "{mode} parent ends with its last child");
        }
    }
}

#[test]
fn golden_fixtures_round_trip() {
    for fixture in ["standard", "exploit", "indefinite", "null_triplet"] {
        let input = golden(fixture);
        let comparison = compare(&input, DecoderConfig::default());
        for mode in [ParseMode::Standard, ParseMode::Gateway] {
            if let Ok(outcome) = comparison.outcome(mode) {
                assert_spans_round_trip(&input, &outcome.root, mode);
                assert_eq!(outcome.root.start, 0);
                assert_eq!(outcome.consumed, outcome.root.end, "{fixture} {mode}");
            }
        }
    }
}

#[test]
fn byte_groups_cover_the_consumed_prefix() {
    let input = golden("exploit");
    let comparison = compare(&input, DecoderConfig::default());
    for mode in [ParseMode::Standard, ParseMode::Gateway] {
        let outcome = comparison.outcome(mode).as_ref().unwrap();
        let bytes = ByteGroupRenderer::annotate(&outcome.root);
        assert_eq!(bytes.len(), outcome.consumed, "{mode}");
        for (i, b) in bytes.iter().enumerate() {
            assert_eq!(b.offset, i);
            assert_eq!(b.byte, input[i]);
        }
        let groups = bytes.iter().map(|b| b.group).max().unwrap() + 1;
        assert_eq!(groups, outcome.root.node_count());
    }
}
