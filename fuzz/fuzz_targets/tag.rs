#![no_main]

use berdiff_wire::{decode_tag, Cursor, ParseMode};
use libfuzzer_sys::fuzz_target;

// Fuzz target: decode_tag in both modes.
//
// Catches bugs in:
// - High-form tags running off the end of the buffer
// - Tag numbers that overflow u64
// - Cursor left past the end after a failed read
fuzz_target!(|data: &[u8]| {
    for mode in [ParseMode::Standard, ParseMode::Gateway] {
        let mut cursor = Cursor::new(data);
        if let Ok(tag) = decode_tag(&mut cursor, mode) {
            assert_eq!(cursor.position(), tag.as_bytes().len());
            assert_eq!(tag.as_bytes(), &data[..cursor.position()]);
            let _ = tag.label();
            if mode == ParseMode::Gateway {
                assert_eq!(tag.as_bytes().len(), 1);
            }
        }
        assert!(cursor.position() <= data.len());
    }
});
