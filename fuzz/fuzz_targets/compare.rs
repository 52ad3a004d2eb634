#![no_main]

use berdiff_decoder::{compare, DecoderConfig, Node, ParseMode};
use libfuzzer_sys::fuzz_target;

fn check(input: &[u8], root: &Node, mode: ParseMode) {
    for node in root.preorder() {
        assert_eq!(node.encoded_bytes(), &input[node.span()]);
        if mode == ParseMode::Standard {
            if let Some(len) = node.length.content_len() {
                for child in node.children() {
                    assert!(child.end <= node.value_start() + len);
                }
            }
        }
    }
}

// Fuzz target: compare() on raw bytes.
//
// Catches bugs in:
// - Panics or unbounded recursion on hostile nesting
// - Spans that do not re-encode to the bytes they cover
// - Standard-mode children leaving their parent's value region
// - Consumed counts past the end of the input
// - A divergence verdict that disagrees with the two outcomes
fuzz_target!(|data: &[u8]| {
    let comparison = compare(data, DecoderConfig::default());
    for mode in [ParseMode::Standard, ParseMode::Gateway] {
        if let Ok(outcome) = comparison.outcome(mode) {
            assert!(outcome.consumed <= data.len());
            assert_eq!(outcome.consumed, outcome.root.end);
            check(data, &outcome.root, mode);
        }
    }
    let expected = match (&comparison.standard, &comparison.gateway) {
        (Ok(standard), Ok(gateway)) => {
            standard.root != gateway.root || standard.consumed != gateway.consumed
        }
        (Err(_), Err(_)) => false,
        _ => true,
    };
    assert_eq!(comparison.diverges(), expected);
});
