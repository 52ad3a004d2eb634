/// Implementation of `berdiff compare`.
///
/// Runs the standard decoder and then the gateway parser over the same
/// bytes inside one fresh session, so the gateway's one-shot exception
/// fires on its root node. Both trees are printed, followed by a summary
/// and a verdict.
///
/// # Output formats
///
/// ```text
/// ┌─────────┬───────────────────────────────────────────────────────────┐
/// │ Format  │ Shape                                                     │
/// ├─────────┼───────────────────────────────────────────────────────────┤
/// │ outline │ indented tag / length / content lines per node (default) │
/// │ bytes   │ one line per claimed byte: offset, byte, T/L/V, group     │
/// │ json    │ {"standard": ..., "gateway": ..., "diverges": bool}       │
/// └─────────┴───────────────────────────────────────────────────────────┘
/// ```
///
/// A divergence is the point of the tool, not an error: `compare` exits 0
/// whenever the input is valid hex. Use `validate` for a pass/fail exit.
use anyhow::{Context, Result};
use berdiff_decoder::{DecoderConfig, compare};
use berdiff_render::render_comparison;

use crate::CompareArgs;
use crate::input;
use crate::json::ComparisonView;
use crate::output::{OutputFormat, parse_format, write_stdout};

/// Run the `berdiff compare` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid hex, if
/// `--format` is unrecognised, or if stdout cannot be written.
pub fn run(args: &CompareArgs, config: DecoderConfig) -> Result<()> {
    let format = parse_format(&args.format)?;
    let bytes = input::load(&args.input)?;

    let comparison = compare(&bytes, config);
    tracing::info!(
        target: "berdiff::cli",
        diverges = comparison.diverges(),
        "compared {} bytes",
        bytes.len()
    );

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&ComparisonView::from(&comparison))
            .context("cannot serialise comparison")?,
        OutputFormat::Outline | OutputFormat::Bytes => {
            render_comparison(&comparison, &format.render_config(!args.no_offsets))
        }
    };
    write_stdout(&rendered)
}
