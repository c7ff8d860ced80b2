//! Error types for the unrtf library.

use std::io;
use thiserror::Error;

/// Result type alias for unrtf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Maximum number of characters of offending input quoted in a parse error.
///
/// Bounding the excerpt keeps error messages readable on pathological input.
pub const EXCERPT_MAX: usize = 30;

/// Error types that can occur during HTML extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not recognized as RTF-encoded text.
    #[error("Unknown file format: not RTF-encoded text")]
    UnknownFormat,

    /// No grammar rule matched at the current tokenizer position.
    ///
    /// This is the single grammar-failure kind: malformed control words,
    /// unterminated hyperlink fields, and unclassified character runs all
    /// report through it.
    #[error("could not parse '{excerpt}': expected {expected} at column {column}")]
    Parse {
        /// Bounded excerpt of the unmatched input (at most [`EXCERPT_MAX`] chars).
        excerpt: String,
        /// Description of what the grammar expected at the failure position.
        expected: String,
        /// 1-based character column of the failure within the line.
        column: usize,
    },

    /// A parse failure wrapped with the 0-based index of the offending line.
    #[error("line {line}: {source}")]
    Line {
        /// 0-based index of the line that failed.
        line: usize,
        /// The underlying parse failure.
        source: Box<Error>,
    },

    /// Error serializing a fragment stream for inspection output.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap this error with the 0-based index of the line it occurred on.
    pub(crate) fn at_line(self, line: usize) -> Self {
        Error::Line {
            line,
            source: Box::new(self),
        }
    }
}

/// Truncate `input` to at most [`EXCERPT_MAX`] characters for error display.
pub(crate) fn bounded_excerpt(input: &str) -> String {
    input.chars().take(EXCERPT_MAX).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not RTF-encoded text");

        let err = Error::Parse {
            excerpt: "\\1bad".to_string(),
            expected: "a control word".to_string(),
            column: 4,
        };
        assert_eq!(
            err.to_string(),
            "could not parse '\\1bad': expected a control word at column 4"
        );
    }

    #[test]
    fn test_line_wrapping() {
        let inner = Error::Parse {
            excerpt: "\\".to_string(),
            expected: "a control word".to_string(),
            column: 1,
        };
        let err = inner.at_line(7);
        assert!(err.to_string().starts_with("line 7: "));
        assert!(matches!(err, Error::Line { line: 7, .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let long = "x".repeat(500);
        assert_eq!(bounded_excerpt(&long).chars().count(), EXCERPT_MAX);
        assert_eq!(bounded_excerpt("short"), "short");
    }
}
