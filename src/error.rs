//! Error types for the paperforge library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for paperforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which positional collection an out-of-range index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// A top-level section of the paper.
    Section,
    /// A subsection within a section.
    Subsection,
    /// A formula entry.
    Formula,
    /// A table entry.
    Table,
    /// An image entry.
    Image,
    /// A table row.
    Row,
    /// A table column.
    Column,
    /// An entry in a metadata list (authors, references, ...).
    Entry,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexKind::Section => "section",
            IndexKind::Subsection => "subsection",
            IndexKind::Formula => "formula",
            IndexKind::Table => "table",
            IndexKind::Image => "image",
            IndexKind::Row => "row",
            IndexKind::Column => "column",
            IndexKind::Entry => "entry",
        };
        write!(f, "{}", name)
    }
}

/// Error types that can occur while editing or submitting a paper.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An editing operation addressed a position outside the current bounds.
    #[error("{kind} index {index} is out of range ({len} present)")]
    IndexOutOfRange {
        /// The collection that was addressed.
        kind: IndexKind,
        /// The index the caller supplied.
        index: usize,
        /// Current length of the collection.
        len: usize,
    },

    /// Table creation was requested with a non-positive row or column count.
    #[error("invalid table dimensions: {rows}x{cols} (both must be positive)")]
    InvalidDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// The paper does not meet the requirements for the requested step.
    #[error("step requirements not met: {0}")]
    StepIncomplete(String),

    /// The paper fails validation before submission.
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// A remote service rejected or failed the request.
    #[error("service error: {0}")]
    Service(String),

    /// Authentication with the backend failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A bearer token could not be decoded.
    #[error("malformed token: {0}")]
    Token(String),

    /// The uploaded file is not a recognizable .docx document.
    #[error("unknown file format: not a valid .docx document")]
    UnknownFormat,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand used by the positional editing operations.
    pub(crate) fn index(kind: IndexKind, index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { kind, index, len }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Service(err.to_string())
    }
}

/// Checks a positional index against the current collection length.
pub(crate) fn ensure_index(kind: IndexKind, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::index(kind, index, len))
    }
}
