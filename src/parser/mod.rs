//! Parsers for the two supported table formats

mod csv;
mod markdown;

use serde::{Deserialize, Serialize};

use crate::model::{DuplicateGroup, Table};

pub use self::csv::{load_csv, load_csv_str};
pub use self::markdown::{parse_markdown_str, parse_markdown_table};

/// A parsed table together with its optional duplicate check
#[derive(Debug)]
pub struct ParseOutcome {
    pub table: Table,
    /// Present when a duplicate check was requested
    pub duplicate_check: Option<DuplicateCheck>,
}

/// Outcome of checking one column for duplicate values. Never an error: the
/// parse succeeds either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicateCheck {
    /// The requested column is not in the header
    UnknownColumn {
        requested: String,
        available: Vec<String>,
    },
    /// The column was checked; `groups` is empty when no key repeats
    Checked {
        column: String,
        groups: Vec<DuplicateGroup>,
    },
}
