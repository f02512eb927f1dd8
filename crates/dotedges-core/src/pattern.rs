//! Edge-line matcher for dot-style graph dumps.
//!
//! Recognizes exactly one textual shape:
//!
//! ```text
//! Node0x<hex> -> Node0x<hex>[color=<word>]
//! ```
//!
//! Whitespace is allowed on either side of `->` but not between the second
//! node token and `[`. The search is unanchored, so leading indentation and
//! trailing content (`;`, comments) are ignored. Anything else on the line
//! (graph headers, node declarations, closing braces) simply does not match.
//!
//! [`EdgeMatch`] borrows its fields from the scanned line; callers copy only
//! what they keep.

use std::sync::LazyLock;

use regex::Regex;

/// Source pattern for a colored edge line.
pub const EDGE_PATTERN: &str =
    r"(Node0x[0-9a-fA-F]+)\s*->\s*(Node0x[0-9a-fA-F]+)\[color=(\w+)\]";

static EDGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EDGE_PATTERN).expect("edge pattern is a valid regex"));

/// The three captures of a matched edge line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeMatch<'a> {
    /// Source node name, e.g. `Node0x1f`.
    pub source: &'a str,
    /// Destination node name.
    pub target: &'a str,
    /// Edge label (the `color` attribute value).
    pub label: &'a str,
}

/// Find the first edge on `line`, if any.
///
/// Returns `None` for every line that does not contain the edge shape; this
/// is not an error.
#[must_use]
pub fn match_line(line: &str) -> Option<EdgeMatch<'_>> {
    let caps = EDGE_RE.captures(line)?;
    Some(EdgeMatch {
        source: caps.get(1)?.as_str(),
        target: caps.get(2)?.as_str(),
        label: caps.get(3)?.as_str(),
    })
}
