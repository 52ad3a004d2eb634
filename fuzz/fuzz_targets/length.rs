#![no_main]

use arbitrary::Arbitrary;
use berdiff_wire::{decode_length, Cursor, LengthForm, ParseMode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    gateway: bool,
    constructed: bool,
    bytes: Vec<u8>,
}

// Fuzz target: decode_length over arbitrary octets.
//
// Catches bugs in:
// - Long-form lengths wider than usize
// - Indefinite lengths with or without a terminator
// - Gateway mode producing anything but a one-octet short form
fuzz_target!(|input: Input| {
    let mode = if input.gateway {
        ParseMode::Gateway
    } else {
        ParseMode::Standard
    };
    let mut cursor = Cursor::new(&input.bytes);
    if let Ok(length) = decode_length(&mut cursor, input.constructed, mode) {
        assert_eq!(cursor.position(), length.raw().len());
        assert_eq!(length.raw(), &input.bytes[..cursor.position()]);
        if input.gateway {
            assert_eq!(length.form(), LengthForm::Short);
            assert_eq!(length.raw().len(), 1);
        }
    }
});
