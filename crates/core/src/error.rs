//! Error types for reading, drawing and saving arc diagrams.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed input file. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line 1, column {column}: unrecognized base '{found}'")]
    UnknownBase { column: usize, found: char },

    #[error("line {line}: unrecognized pair base '{found}'")]
    UnknownPairBase { line: usize, found: String },

    #[error("line {line}: invalid pair count '{found}'")]
    InvalidPairCount { line: usize, found: String },

    #[error("line {line}: expected {expected} pair lines, found {found}")]
    MissingPair {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: expected 4 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid index '{found}'")]
    InvalidIndex { line: usize, found: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("drawing failed: {0}")]
    Render(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
