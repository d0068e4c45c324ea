use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures around the translator: loading tables, reading input, writing output.
///
/// Translation itself never fails; unknown tokens fall back to the default pattern.
#[derive(Debug, Error)]
pub enum ShermanError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("table line {line}: {message}")]
    TableLine { line: usize, message: String },

    #[error("invalid token {0:?}: tokens are one or two characters")]
    InvalidToken(String),

    #[error("token {token:?}: row {row} out of range (0..4)")]
    RowOutOfRange { token: String, row: usize },

    #[error("token {token:?}: column {column} out of range (0..8)")]
    ColumnOutOfRange { token: String, column: usize },

    #[error("token {0:?} appears more than once")]
    DuplicateToken(String),

    #[error("table has no entries")]
    EmptyTable,

    #[error("failed to compile token matcher: {0}")]
    Matcher(#[from] regex::Error),

    #[error("unknown encoding label {0:?}")]
    UnknownEncoding(String),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("no files match {0:?}")]
    NoMatches(String),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShermanError>;

impl ShermanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ShermanError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = ShermanError::io(
            "notes/missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("notes/missing.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn table_line_error_reports_line_number() {
        let err = ShermanError::TableLine {
            line: 7,
            message: "expected 3 fields".to_string(),
        };
        assert_eq!(err.to_string(), "table line 7: expected 3 fields");
    }
}
