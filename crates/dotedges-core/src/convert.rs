//! Single-pass dot → edge-list conversion.
//!
//! A [`Converter`] owns the node table and the edge list for one run. Lines
//! are fed in input order; matching lines intern their endpoints (source
//! first) and append an edge, everything else only bumps the skip counter.
//!
//! Line breaks are `\n`, `\r\n` or a lone `\r`, so classic-Mac dumps split
//! the same way as Unix ones.
//!
//! [`convert_file`] reads the whole input before the output is created, so a
//! missing or unreadable input never touches the output path.

use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::edge::{Edge, EdgeList};
use crate::error::ConvertError;
use crate::pattern::match_line;
use crate::table::NodeTable;

/// Accumulates edges from a stream of lines.
#[derive(Debug, Default)]
pub struct Converter {
    nodes: NodeTable,
    edges: EdgeList,
    lines_scanned: usize,
}

impl Converter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one input line. Returns the edge when the line matched.
    pub fn feed_line(&mut self, line: &str) -> Option<&Edge> {
        self.lines_scanned += 1;
        let Some(m) = match_line(line) else {
            trace!(line = self.lines_scanned, "no edge on line");
            return None;
        };

        let source = self.nodes.intern(m.source);
        let target = self.nodes.intern(m.target);
        debug!(
            line = self.lines_scanned,
            %source,
            %target,
            label = m.label,
            "matched edge"
        );
        self.edges.push(Edge::new(source, target, m.label));
        self.edges.as_slice().last()
    }

    /// Feed every line of `reader`.
    ///
    /// # Errors
    ///
    /// Returns the first read error, including invalid UTF-8.
    pub fn scan<R: Read>(&mut self, mut reader: R) -> io::Result<()> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        for line in split_lines(&text) {
            self.feed_line(line);
        }
        Ok(())
    }

    #[must_use]
    pub const fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    #[must_use]
    pub const fn edges(&self) -> &EdgeList {
        &self.edges
    }

    #[must_use]
    pub const fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }

    /// Consume the converter, yielding the collected table and edges.
    #[must_use]
    pub fn finish(self) -> (NodeTable, EdgeList) {
        (self.nodes, self.edges)
    }
}

/// Split on `\n`, `\r\n` and lone `\r`. A trailing terminator does not
/// produce an empty final line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..pos];
        let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + width..];
        Some(line)
    })
}

/// Outcome of a completed file conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub edges: usize,
    pub nodes: usize,
    pub labels: usize,
    pub lines_scanned: usize,
    pub lines_skipped: usize,
}

impl ConversionSummary {
    fn new(input: &Path, output: &Path, converter: &Converter) -> Self {
        let edges = converter.edges().len();
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            edges,
            nodes: converter.nodes().len(),
            labels: converter.edges().label_count(),
            lines_scanned: converter.lines_scanned(),
            lines_skipped: converter.lines_scanned() - edges,
        }
    }
}

/// Convert the dot file at `input` into an edge list at `output`.
///
/// The output is truncated if it exists.
///
/// # Errors
///
/// - [`ConvertError::ReadInput`] if `input` cannot be opened or read.
/// - [`ConvertError::WriteOutput`] if `output` cannot be created or written;
///   the output file may then be left partially written.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionSummary, ConvertError> {
    let read_err = |source: io::Error| ConvertError::ReadInput {
        path: input.to_path_buf(),
        source,
    };
    let write_err = |source: io::Error| ConvertError::WriteOutput {
        path: output.to_path_buf(),
        source,
    };

    let mut converter = Converter::new();
    {
        let file = File::open(input).map_err(read_err)?;
        converter.scan(file).map_err(read_err)?;
    }
    debug!(
        input = %input.display(),
        lines = converter.lines_scanned(),
        edges = converter.edges().len(),
        "input scanned"
    );

    let file = File::create(output).map_err(write_err)?;
    converter
        .edges()
        .write_to(BufWriter::new(file))
        .map_err(write_err)?;

    let summary = ConversionSummary::new(input, output, &converter);
    info!(
        edges = summary.edges,
        nodes = summary.nodes,
        output = %output.display(),
        "conversion complete"
    );
    Ok(summary)
}
