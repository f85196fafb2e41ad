//! Error types for tabsift

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a comparison a table sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    Reference,
    Incoming,
}

impl std::fmt::Display for TableRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableRole::Reference => write!(f, "reference"),
            TableRole::Incoming => write!(f, "incoming"),
        }
    }
}

/// Errors that can occur while parsing or comparing tables
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("file not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// Failed to read an input file
    #[error("failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File content could not be decoded as the expected format
    #[error("could not decode '{path}': {message}")]
    Decode { path: PathBuf, message: String },

    /// Structured-text input has fewer than a header and a separator line
    #[error("no table found in '{path}': expected at least a header and a separator line")]
    MalformedTable { path: PathBuf },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Key column absent from a table's header
    #[error("column '{column}' not found in {table} table '{path}'; available columns: {}", available.join(", "))]
    MissingColumn {
        column: String,
        table: TableRole,
        path: PathBuf,
        available: Vec<String>,
    },

    /// IO error while rendering output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
