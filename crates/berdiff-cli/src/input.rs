/// Input loading shared by every sub-command.
///
/// ```text
/// ┌──────────────────┬──────────────────────────────────────────┐
/// │ Given            │ Source                                   │
/// ├──────────────────┼──────────────────────────────────────────┤
/// │ positional HEX   │ the argument itself                      │
/// │ --file PATH      │ the file's text                          │
/// │ neither          │ stdin                                    │
/// └──────────────────┴──────────────────────────────────────────┘
/// ```
///
/// Whatever the source, the text goes through
/// [`berdiff_decoder::decode_hex`], so surrounding whitespace is ignored
/// and malformed hex is reported with its offset.
use std::fs;
use std::io::{self, Read as _};

use anyhow::{Context, Result, anyhow};
use berdiff_decoder::{ParseMode, decode_hex};

use crate::InputArgs;

/// Read the hex text named by `args` and decode it to bytes.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read, or if the text
/// is not valid hex.
pub fn load(args: &InputArgs) -> Result<Vec<u8>> {
    let (text, origin) = if let Some(hex) = &args.hex {
        (hex.clone(), "argument".to_string())
    } else if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        (text, path.display().to_string())
    } else {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        (text, "stdin".to_string())
    };

    let bytes = decode_hex(&text).with_context(|| format!("invalid hex input from {origin}"))?;
    tracing::debug!(target: "berdiff::cli", origin = %origin, len = bytes.len(), "loaded input");
    Ok(bytes)
}

/// Parses the `--mode` string to a [`ParseMode`].
///
/// # Errors
///
/// Returns an error for unrecognised mode names.
pub fn parse_mode(s: &str) -> Result<ParseMode> {
    match s.to_lowercase().as_str() {
        "standard" | "std" => Ok(ParseMode::Standard),
        "gateway" | "firewall" => Ok(ParseMode::Gateway),
        _ => Err(anyhow!("unknown mode {s:?}, expected standard|gateway")),
    }
}
