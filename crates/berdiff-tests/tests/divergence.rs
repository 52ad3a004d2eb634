//! The two golden inputs the viewer exists to explain.
//!
//! `standard` is a well-formed 36-byte SEQUENCE that both parsers read
//! identically. `exploit` re-encodes the OCTET STRING length as long form
//! `81 08`: the standard decoder still reads 37 bytes, while the gateway
//! takes `0x81` as a short length of 129 and walks 138 bytes into the
//! zero padding.

use berdiff_decoder::{DecodeError, DecoderConfig, NodeBody, ParseMode, ParseSession, compare, compare_hex};
use berdiff_tests::{golden, golden_hex};
use berdiff_wire::{LengthForm, LengthValue};

#[test]
fn standard_input_agrees() {
    let input = golden("standard");
    assert_eq!(input.len(), 36);

    let comparison = compare(&input, DecoderConfig::default());
    assert!(!comparison.diverges());

    let standard = comparison.standard.as_ref().unwrap();
    let gateway = comparison.gateway.as_ref().unwrap();
    assert_eq!(standard.consumed, 36);
    assert_eq!(gateway.consumed, 36);
    assert_eq!(standard.root, gateway.root);

    let root = &standard.root;
    assert_eq!(root.span(), 0..36);
    let spans: Vec<_> = root.children().iter().map(|c| c.span()).collect();
    assert_eq!(spans, vec![2..5, 5..15, 15..36]);
    assert_eq!(root.children()[2].children().len(), 4);
}

#[test]
fn exploit_standard_reading() {
    let outcome = ParseSession::default()
        .parse(&golden("exploit"), ParseMode::Standard)
        .unwrap();
    assert_eq!(outcome.consumed, 37);

    let octet_string = &outcome.root.children()[1];
    assert_eq!(octet_string.span(), 5..16);
    assert_eq!(octet_string.length.raw(), &[0x81, 0x08]);
    assert_eq!(octet_string.length.form(), LengthForm::Long);
    assert_eq!(octet_string.content(), Some(&b"firewall"[..]));
}

#[test]
fn exploit_gateway_overreads() {
    let input = golden("exploit");
    assert_eq!(input.len(), 141);

    let outcome = ParseSession::default()
        .parse(&input, ParseMode::Gateway)
        .unwrap();
    assert_eq!(outcome.consumed, 138);

    let root = &outcome.root;
    assert_eq!(root.length.value(), LengthValue::Definite(35));
    assert_eq!(root.span(), 0..138);
    assert_eq!(root.children().len(), 3);

    let hidden = &root.children()[1];
    assert_eq!(hidden.span(), 5..136);
    assert_eq!(hidden.length.raw(), &[0x81]);
    assert_eq!(hidden.length.form(), LengthForm::Short);
    assert_eq!(hidden.length.value(), LengthValue::Definite(129));
    let NodeBody::Primitive { content } = &hidden.body else {
        panic!("gateway should read 0x04 as primitive");
    };
    assert_eq!(content.len(), 129);
    // The standard reading's [1] element is swallowed whole.
    assert_eq!(&content[9..11], &[0xA1, 0x13]);

    let trailer = &root.children()[2];
    assert_eq!(trailer.span(), 136..138);
    assert_eq!(trailer.tag.label(), "END-OF-CONTENTS");
}

#[test]
fn exploit_diverges() {
    let comparison = compare_hex(&golden_hex("exploit"), DecoderConfig::default()).unwrap();
    assert!(comparison.diverges());

    let standard = comparison.standard.unwrap();
    let gateway = comparison.gateway.unwrap();
    assert!(gateway.consumed > standard.consumed);
    // Both roots claim three children; the divergence is in what they are.
    assert_eq!(standard.root.children().len(), 3);
    assert_eq!(gateway.root.children().len(), 3);
    assert_ne!(standard.root, gateway.root);
}

#[test]
fn gateway_without_exception_rejects_the_overread() {
    // Once the latch is spent the root is decoded by its declared length,
    // and the 129-byte OCTET STRING no longer fits inside it.
    let mut session = ParseSession::default();
    session.parse(&golden("standard"), ParseMode::Gateway).unwrap();
    assert!(session.gateway_exception_fired());

    let err = session.parse(&golden("exploit"), ParseMode::Gateway).unwrap_err();
    assert_eq!(
        err,
        DecodeError::ChildOverrunsParent {
            offset: 5,
            parent_end: 37
        }
    );
}
