//! Numeric edge list and its line format.
//!
//! # Format
//!
//! ```text
//! {src}␠{dst}␠{label}\n
//! ```
//!
//! Indices are base-10, starting at 0. No header, no trailer. When reading a
//! list back, blank lines and lines starting with `#` are skipped.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::trace;

use crate::error::EdgeLineError;
use crate::table::NodeIndex;

/// One directed, labeled edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Index of the source node.
    pub source: NodeIndex,
    /// Index of the destination node.
    pub target: NodeIndex,
    /// Label carried over unchanged from the input.
    pub label: String,
}

impl Edge {
    #[must_use]
    pub fn new(source: NodeIndex, target: NodeIndex, label: impl Into<String>) -> Self {
        Self {
            source,
            target,
            label: label.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.target, self.label)
    }
}

/// Append-only edge sequence in input order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.edges
            .iter()
            .map(|e| e.label.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Serialize every edge, one per line.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for edge in &self.edges {
            writeln!(out, "{edge}")?;
        }
        out.flush()
    }

    /// Load a numeric edge list.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeLineError`] on read failure or on the first malformed
    /// line (line numbers are 1-based).
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, EdgeLineError> {
        let mut list = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                trace!(line = line_no, "skipping blank or comment line");
                continue;
            }
            list.push(parse_edge_line(trimmed, line_no)?);
        }
        Ok(list)
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

fn parse_edge_line(line: &str, line_no: usize) -> Result<Edge, EdgeLineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [src, dst, label] = fields.as_slice() else {
        return Err(EdgeLineError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };
    Ok(Edge::new(
        parse_index(src, line_no)?,
        parse_index(dst, line_no)?,
        *label,
    ))
}

fn parse_index(raw: &str, line_no: usize) -> Result<NodeIndex, EdgeLineError> {
    raw.parse::<usize>()
        .map(NodeIndex)
        .map_err(|_| EdgeLineError::InvalidIndex {
            line: line_no,
            raw: raw.to_owned(),
        })
}
