/// Output formats shared by `compare` and `parse`.
use std::io::{self, Write as _};

use anyhow::{Context, Result, anyhow};
use berdiff_render::{RenderConfig, RenderMode};

/// What `--format` selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Outline,
    Bytes,
    Json,
}

impl OutputFormat {
    /// The text renderer configuration for this format. `Json` does not
    /// use it.
    pub fn render_config(self, show_offsets: bool) -> RenderConfig {
        let mode = match self {
            Self::Bytes => RenderMode::ByteGroups,
            Self::Outline | Self::Json => RenderMode::Outline,
        };
        RenderConfig {
            mode,
            show_offsets,
            ..RenderConfig::default()
        }
    }
}

/// Parses the `--format` string to an [`OutputFormat`].
///
/// # Errors
///
/// Returns an error for unrecognised format names.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "outline" | "tree" => Ok(OutputFormat::Outline),
        "bytes" | "groups" => Ok(OutputFormat::Bytes),
        "json" => Ok(OutputFormat::Json),
        _ => Err(anyhow!("unknown format {s:?}, expected outline|bytes|json")),
    }
}

/// Write `text` to stdout, adding a final newline if it lacks one.
///
/// # Errors
///
/// Returns an error if stdout is closed.
pub fn write_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(text.as_bytes())
        .context("cannot write to stdout")?;
    if !text.ends_with('\n') {
        handle.write_all(b"\n").context("cannot write to stdout")?;
    }
    Ok(())
}
