use std::fmt;
use std::io;
use std::path::PathBuf;

/// Machine-readable error codes for scripts wrapping the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UsageError,
    InputUnreadable,
    OutputUnwritable,
    MalformedEdgeLine,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UsageError => "E1001",
            Self::InputUnreadable => "E2001",
            Self::OutputUnwritable => "E2002",
            Self::MalformedEdgeLine => "E3001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UsageError => "Missing or invalid arguments",
            Self::InputUnreadable => "Input file could not be read",
            Self::OutputUnwritable => "Output file could not be written",
            Self::MalformedEdgeLine => "Malformed edge-list line",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::UsageError => Some("Run `dot2edges <input.dot> <output.txt>`."),
            Self::InputUnreadable => {
                Some("Check that the input path exists and holds UTF-8 text.")
            }
            Self::OutputUnwritable => {
                Some("Check that the output directory exists and is writable.")
            }
            Self::MalformedEdgeLine => Some("Each line must be `<src> <dst> <label>`."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failures of a file-to-file conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input could not be opened or read.
    #[error("{}: cannot read {}: {source}", ErrorCode::InputUnreadable, .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output could not be created, written or flushed.
    #[error("{}: cannot write {}: {source}", ErrorCode::OutputUnwritable, .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ReadInput { .. } => ErrorCode::InputUnreadable,
            Self::WriteOutput { .. } => ErrorCode::OutputUnwritable,
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        self.code().hint()
    }
}

/// Errors while loading a numeric edge-list file back into memory.
#[derive(Debug, thiserror::Error)]
pub enum EdgeLineError {
    /// Underlying reader failed.
    #[error("edge-list I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line did not have exactly three whitespace-separated fields.
    #[error("line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// A node index field was not a non-negative integer.
    #[error("line {line}: invalid node index '{raw}'")]
    InvalidIndex { line: usize, raw: String },
}

impl EdgeLineError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::InputUnreadable,
            Self::FieldCount { .. } | Self::InvalidIndex { .. } => ErrorCode::MalformedEdgeLine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [
            ErrorCode::UsageError,
            ErrorCode::InputUnreadable,
            ErrorCode::OutputUnwritable,
            ErrorCode::MalformedEdgeLine,
        ];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::OutputUnwritable.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn convert_error_display_carries_code_and_path() {
        let err = ConvertError::ReadInput {
            path: PathBuf::from("missing.dot"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        let rendered = err.to_string();
        assert!(rendered.starts_with("E2001"), "{rendered}");
        assert!(rendered.contains("missing.dot"), "{rendered}");
        assert_eq!(err.code(), ErrorCode::InputUnreadable);
        assert!(err.hint().is_some());
    }

    #[test]
    fn edge_line_errors_map_to_malformed_code() {
        let err = EdgeLineError::FieldCount { line: 3, found: 2 };
        assert_eq!(err.code(), ErrorCode::MalformedEdgeLine);
        assert_eq!(err.to_string(), "line 3: expected 3 fields, found 2");
    }
}
