use std::fmt::Write as _;

use berdiff_decoder::{Comparison, DecodeError, ParseMode, ParseOutcome};

use crate::config::RenderConfig;
use crate::renderer::{DefaultRenderer, TreeRenderer};

/// Render both readings of an input side by side, followed by a summary.
///
/// ```text
/// standard parser
/// ---------------
/// <tree>
///
/// gateway parser
/// --------------
/// <tree>
///
/// summary
/// -------
/// standard: root children=3 consumed=37
/// gateway:  root children=3 consumed=138
/// verdict:  parsers DIVERGE
/// ```
///
/// A mode that failed shows `error: ...` in place of its tree.
#[must_use]
pub fn render_comparison(comparison: &Comparison, config: &RenderConfig) -> String {
    let mut out = String::new();
    for mode in [ParseMode::Standard, ParseMode::Gateway] {
        let heading = format!("{mode} parser");
        let _ = writeln!(out, "{heading}\n{}", "-".repeat(heading.len()));
        match comparison.outcome(mode) {
            Ok(outcome) => out.push_str(&DefaultRenderer.render(&outcome.root, config)),
            Err(e) => out.push_str(&error_line(e)),
        }
        out.push_str("\n\n");
    }

    out.push_str("summary\n-------\n");
    let _ = writeln!(out, "standard: {}", summary_line(&comparison.standard));
    let _ = writeln!(out, "gateway:  {}", summary_line(&comparison.gateway));
    let verdict = if comparison.diverges() {
        "parsers DIVERGE"
    } else {
        "parsers agree"
    };
    let _ = write!(out, "verdict:  {verdict}");
    out
}

fn summary_line(result: &Result<ParseOutcome, DecodeError>) -> String {
    match result {
        Ok(outcome) => format!(
            "root children={} consumed={}",
            outcome.root.children().len(),
            outcome.consumed
        ),
        Err(e) => error_line(e),
    }
}

fn error_line(e: &DecodeError) -> String {
    format!("error: {} ({e})", e.kind())
}
