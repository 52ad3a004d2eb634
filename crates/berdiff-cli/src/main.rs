/// berdiff: show how a standard BER decoder and a simplified gateway
/// parser read the same bytes.
///
/// # Command overview
///
/// ```text
/// berdiff <COMMAND> [OPTIONS]
///
/// Commands:
///   compare    Parse in both modes and render both trees plus a verdict
///   parse      Parse in one mode and render the tree
///   validate   Exit 0 only if both modes parse and agree
///   help       Print help information
///
/// Global options:
///   -v, --verbose        Log decoder decisions to stderr
///   --no-color           Disable ANSI colours in log output
///   --max-depth <N>      Nesting limit (default 64, at most 1024)
///   -h, --help           Print help
///   -V, --version        Print version
/// ```
///
/// Input is hex text, given as an argument, read from `--file`, or read
/// from stdin when neither is present.
///
/// # Exit codes
///
/// | Code | Meaning                                               |
/// |------|-------------------------------------------------------|
/// | 0    | Success                                               |
/// | 1    | Error (bad hex, decode failure, divergence, I/O, ...) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_compare;
mod cmd_parse;
mod cmd_validate;
mod input;
mod json;
mod output;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Compare a standard BER decoder with a divergent gateway parser.
#[derive(Parser)]
#[command(name = "berdiff", version, about = "BER parser differential viewer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder decisions (tags, lengths, the gateway exception) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable ANSI colours in log output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Deepest nesting level accepted before failing with MaxDepthExceeded
    /// (at most 1024).
    #[arg(
        long,
        global = true,
        default_value_t = berdiff_decoder::DEFAULT_MAX_DEPTH,
        value_parser = parse_max_depth
    )]
    max_depth: usize,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Parse in both modes within one session and render both trees.
    Compare(CompareArgs),
    /// Parse in a single mode and render the tree.
    Parse(ParseArgs),
    /// Check that both modes parse the input and agree on it.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Where the hex text comes from.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Hex-encoded input, e.g. `3006020101050000`.
    pub hex: Option<String>,

    /// Read hex text from this file instead.
    #[arg(short, long, conflicts_with = "hex")]
    pub file: Option<PathBuf>,
}

/// Arguments for `berdiff compare`.
///
/// ```text
/// ┌─────────────┬─────────────────────────────────────────────────────┐
/// │ Flag        │ Values / default                                    │
/// ├─────────────┼─────────────────────────────────────────────────────┤
/// │ --format    │ outline (default) | bytes | json                    │
/// │ --no-offsets│ hide `@start..end` spans in outline output          │
/// └─────────────┴─────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format: `outline`, `bytes`, or `json`.
    #[arg(long, default_value = "outline")]
    pub format: String,

    /// Hide input spans in outline output.
    #[arg(long)]
    pub no_offsets: bool,
}

/// Arguments for `berdiff parse`.
#[derive(clap::Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Parser to run: `standard` or `gateway`.
    #[arg(long, default_value = "standard")]
    pub mode: String,

    /// Output format: `outline`, `bytes`, or `json`.
    #[arg(long, default_value = "outline")]
    pub format: String,

    /// Hide input spans in outline output.
    #[arg(long)]
    pub no_offsets: bool,
}

/// Arguments for `berdiff validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    let config = berdiff_decoder::DecoderConfig::default().with_max_depth(cli.max_depth);

    let result = match cli.command {
        Commands::Compare(args) => cmd_compare::run(&args, config),
        Commands::Parse(args) => cmd_parse::run(&args, config),
        Commands::Validate(args) => cmd_validate::run(&args, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

// ── Flag parsers ──────────────────────────────────────────────────────────────

/// Parses `--max-depth`, rejecting values above
/// [`berdiff_decoder::MAX_DEPTH_LIMIT`].
fn parse_max_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s
        .parse()
        .map_err(|e| format!("{s:?} is not a depth: {e}"))?;
    if depth > berdiff_decoder::MAX_DEPTH_LIMIT {
        return Err(format!(
            "{depth} exceeds the maximum of {}",
            berdiff_decoder::MAX_DEPTH_LIMIT
        ));
    }
    Ok(depth)
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool, no_color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_depth_bounds() {
        assert_eq!(parse_max_depth("0").unwrap(), 0);
        assert_eq!(
            parse_max_depth("1024").unwrap(),
            berdiff_decoder::MAX_DEPTH_LIMIT
        );
        assert!(parse_max_depth("1025").is_err());
        assert!(parse_max_depth("deep").is_err());
    }

    #[test]
    fn oversized_max_depth_is_a_usage_error() {
        let result = Cli::try_parse_from(["berdiff", "--max-depth", "100000", "validate", "0500"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["berdiff", "validate", "0500"]).unwrap();
        assert_eq!(cli.max_depth, berdiff_decoder::DEFAULT_MAX_DEPTH);
    }
}
