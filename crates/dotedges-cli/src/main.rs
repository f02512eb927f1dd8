#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::Parser;
use clap::error::ErrorKind;
use dotedges_core::ErrorCode;
use output::OutputMode;
use std::env;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit status for argument errors.
const USAGE_EXIT_CODE: i32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "dot2edges",
    author,
    version,
    about = "Convert a dot edge dump into a numeric edge list",
    long_about = "Read every `Node0x.. -> Node0x..[color=..]` line of INPUT, number nodes in order of \
                  first appearance, and write one `<src> <dst> <label>` line per edge to OUTPUT.",
    after_help = "EXAMPLES:\n    # Convert a graph dump\n    dot2edges graph.dot graph.txt\n\n    # Emit a machine-readable summary\n    dot2edges graph.dot graph.txt --json"
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit the summary as JSON instead of human-readable text.
    #[arg(long)]
    json: bool,

    /// Suppress the completion summary.
    #[arg(short, long)]
    quiet: bool,

    #[command(flatten)]
    convert: cmd::convert::ConvertArgs,

    /// Positionals after OUTPUT are accepted and ignored.
    #[arg(hide = true, value_name = "IGNORED")]
    ignored: Vec<String>,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.json, self.quiet)
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("DOTEDGES_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "dotedges=debug,dot2edges=debug,info"
        } else {
            "dotedges=warn,dot2edges=warn,warn"
        })
    });

    let format = env::var("DOTEDGES_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

/// Parse arguments, turning every argument error into a usage message on
/// stdout and exit status 1. `--help` and `--version` keep clap's behavior.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            print!("{err}");
            println!("[{}] {}", ErrorCode::UsageError, ErrorCode::UsageError.message());
            if let Some(hint) = ErrorCode::UsageError.hint() {
                println!("{hint}");
            }
            std::process::exit(USAGE_EXIT_CODE);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    if !cli.ignored.is_empty() {
        debug!(ignored = ?cli.ignored, "ignoring extra positional arguments");
    }
    debug!(
        input = %cli.convert.input.display(),
        output = %cli.convert.output.display(),
        "starting conversion"
    );

    cmd::convert::run_convert(&cli.convert, cli.output_mode())
}
