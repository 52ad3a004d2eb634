/// Implementation of `berdiff validate`.
///
/// Parses the input in both modes and reports one `✓` or `✗` line per
/// check. The command exits with code 0 only when both modes parse the
/// input and read the same tree over the same bytes; the main dispatcher
/// in `main.rs` converts `Err` to exit code 1.
///
/// # Success output
///
/// ```text
/// ✓ standard: parsed 36 bytes, root SEQUENCE with 3 children
/// ✓ gateway: parsed 36 bytes, root SEQUENCE with 3 children
/// ✓ agreement: both parsers read the same tree
/// ```
///
/// # Failure output
///
/// ```text
/// ✓ standard: parsed 37 bytes, root SEQUENCE with 3 children
/// ✓ gateway: parsed 138 bytes, root SEQUENCE with 3 children
/// ✗ agreement: parsers diverge (standard consumed 37 bytes, gateway 138)
/// ```
use anyhow::{Result, anyhow};
use berdiff_decoder::{Comparison, DecodeError, DecoderConfig, ParseMode, ParseOutcome, compare};

use crate::ValidateArgs;
use crate::input;

/// Run the `berdiff validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid hex, if
/// either mode fails to parse, or if the modes diverge.
pub fn run(args: &ValidateArgs, config: DecoderConfig) -> Result<()> {
    let bytes = input::load(&args.input)?;
    let comparison = compare(&bytes, config);

    let report = report(&comparison);
    for line in &report {
        println!("{line}");
    }

    if report.iter().any(|line| line.starts_with('✗')) {
        return Err(anyhow!("validation failed"));
    }
    Ok(())
}

// ── Report lines ──────────────────────────────────────────────────────────────

fn report(comparison: &Comparison) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    for mode in [ParseMode::Standard, ParseMode::Gateway] {
        lines.push(mode_line(mode, comparison.outcome(mode)));
    }

    let agreement = match (&comparison.standard, &comparison.gateway) {
        (Ok(standard), Ok(gateway)) if comparison.diverges() => format!(
            "✗ agreement: parsers diverge (standard consumed {} bytes, gateway {})",
            standard.consumed, gateway.consumed
        ),
        (Ok(_), Ok(_)) => "✓ agreement: both parsers read the same tree".to_string(),
        (Err(_), Err(_)) => "✗ agreement: neither parser accepts the input".to_string(),
        _ => "✗ agreement: only one parser accepts the input".to_string(),
    };
    lines.push(agreement);
    lines
}

fn mode_line(mode: ParseMode, result: &Result<ParseOutcome, DecodeError>) -> String {
    match result {
        Ok(outcome) => format!(
            "✓ {mode}: parsed {} bytes, root {} with {} children",
            outcome.consumed,
            outcome.root.tag.label(),
            outcome.root.children().len()
        ),
        Err(e) => format!("✗ {mode}: {} at offset {}: {e}", e.kind(), e.offset()),
    }
}
