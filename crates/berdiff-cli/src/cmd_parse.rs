/// Implementation of `berdiff parse`.
///
/// Parses the input in a single mode and prints the tree. A gateway parse
/// here runs in a fresh session, so the root is forced to three children
/// exactly as it would be in `compare`.
///
/// ```text
/// $ berdiff parse 3006050005000500 --mode gateway
/// 30 06  SEQUENCE len=6 children=3 @0..8
///   05 00  NULL len=0 @2..4
///   05 00  NULL len=0 @4..6
///   05 00  NULL len=0 @6..8
/// ```
use anyhow::{Context, Result};
use berdiff_decoder::{DecoderConfig, ParseSession};
use berdiff_render::{DefaultRenderer, TreeRenderer};

use crate::ParseArgs;
use crate::input;
use crate::json::OutcomeView;
use crate::output::{OutputFormat, parse_format, write_stdout};

/// Run the `berdiff parse` command.
///
/// Bytes after the root element are not part of the tree; their count is
/// reported on stderr.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid hex, if a
/// flag value is unrecognised, or if the parse itself fails.
pub fn run(args: &ParseArgs, config: DecoderConfig) -> Result<()> {
    let mode = input::parse_mode(&args.mode)?;
    let format = parse_format(&args.format)?;
    let bytes = input::load(&args.input)?;

    let result = ParseSession::new(config).parse(&bytes, mode);

    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&OutcomeView::new(mode.name(), &result))
            .context("cannot serialise parse outcome")?;
        write_stdout(&json)?;
        result.with_context(|| format!("{mode} parse failed"))?;
        return Ok(());
    }

    let outcome = result.with_context(|| format!("{mode} parse failed"))?;
    let rendered = DefaultRenderer.render(&outcome.root, &format.render_config(!args.no_offsets));
    write_stdout(&rendered)?;

    let trailing = bytes.len() - outcome.consumed;
    if trailing > 0 {
        eprintln!("note: {trailing} trailing byte(s) after offset {}", outcome.consumed);
    }
    Ok(())
}
