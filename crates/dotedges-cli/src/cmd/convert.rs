use anyhow::{Context as _, Result};
use clap::Args;
use dotedges_core::convert_file;
use std::path::PathBuf;
use tracing::warn;

use crate::output::{OutputMode, render_item};

/// Positional arguments for a conversion run.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Dot-style graph file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Edge-list file to write (truncated if it exists).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Convert `args.input` into `args.output` and print the summary.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the output cannot be
/// written, or the summary cannot be printed.
pub fn run_convert(args: &ConvertArgs, output: OutputMode) -> Result<()> {
    let summary = convert_file(&args.input, &args.output).inspect_err(|err| {
        if let Some(hint) = err.hint() {
            warn!(code = %err.code(), "{hint}");
        }
    })?;

    render_item(&summary, output).context("failed to print conversion summary")?;
    Ok(())
}
