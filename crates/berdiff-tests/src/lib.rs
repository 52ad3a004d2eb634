//! Golden fixtures shared by the integration suites.
//!
//! Fixtures live in `tests/golden/<name>.hex` as one line of hex text.
//!
//! | Fixture      | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | standard     | 36-byte SEQUENCE both parsers read identically            |
//! | exploit      | 141 bytes: long-form `04 81 08` hides a 129-byte overread |
//! | indefinite   | `30 80 02 01 05 00 00`, indefinite-length SEQUENCE        |
//! | null_triplet | `30 02` wrapping one NULL, followed by two more NULLs     |

#![allow(clippy::pedantic)]

use std::path::Path;

/// The hex text of fixture `name`, trimmed.
///
/// # Panics
///
/// Panics if the fixture file is missing.
pub fn golden_hex(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(format!("{name}.hex"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
        .trim()
        .to_string()
}

/// The bytes of fixture `name`.
///
/// # Panics
///
/// Panics if the fixture file is missing or is not valid hex.
pub fn golden(name: &str) -> Vec<u8> {
    hex::decode(golden_hex(name)).unwrap_or_else(|e| panic!("fixture {name} is not hex: {e}"))
}
