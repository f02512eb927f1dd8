//! Summary rendering for human and JSON output.
//!
//! Stdout carries only the completion summary; logs go to stderr.

use dotedges_core::ConversionSummary;
use std::io::{self, Write};

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One human-readable completion line.
    Human,
    /// One JSON object.
    Json,
    /// Nothing on success.
    Quiet,
}

impl OutputMode {
    /// Resolve the mode from flags. `--quiet` wins over `--json`.
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if json {
            Self::Json
        } else {
            Self::Human
        }
    }
}

/// Anything the CLI prints as a final result.
pub trait Renderable {
    /// Render for human consumption.
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Render as a self-contained JSON object.
    fn render_json(&self, w: &mut dyn Write) -> io::Result<()>;
}

impl Renderable for ConversionSummary {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "[dot2edges] conversion complete: {} edges, {} nodes → {}",
            self.edges,
            self.nodes,
            self.output.display()
        )
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(&mut *w, self).map_err(io::Error::from)?;
        writeln!(w)
    }
}

/// Render `item` to `w` in the given mode.
pub fn render_to<R: Renderable>(item: &R, mode: OutputMode, w: &mut dyn Write) -> io::Result<()> {
    match mode {
        OutputMode::Human => item.render_human(w),
        OutputMode::Json => item.render_json(w),
        OutputMode::Quiet => Ok(()),
    }
}

/// Render `item` to stdout in the given mode.
pub fn render_item<R: Renderable>(item: &R, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(item, mode, &mut out)?;
    out.flush()
}
