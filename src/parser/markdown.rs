//! Parser for loosely-formatted pipe-delimited text tables
//!
//! Table lines are non-blank lines containing at least one `|`; everything
//! else is prose and ignored. The first table line is the header, the second
//! is the separator row (skipped without validation), and the rest are data
//! rows.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{duplicate_groups, Column, Table};

use super::{DuplicateCheck, ParseOutcome};

/// Parse a pipe-delimited table from a file, optionally checking one column
/// for duplicate values.
pub fn parse_markdown_table(
    path: impl AsRef<Path>,
    check_duplicates: Option<&str>,
) -> Result<ParseOutcome> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(Error::Decode {
                path: path.to_path_buf(),
                message: "file is not valid UTF-8".to_string(),
            })
        }
        Err(e) => {
            return Err(Error::FileRead {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    parse_markdown_str(&content, path, check_duplicates)
}

/// Parse a pipe-delimited table from a string (useful for testing).
/// `source_name` stands in for the file path in errors and diagnostics.
pub fn parse_markdown_str(
    content: &str,
    source_name: impl AsRef<Path>,
    check_duplicates: Option<&str>,
) -> Result<ParseOutcome> {
    let source = source_name.as_ref();

    // (line number, line) for table lines only
    let table_lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && line.contains('|'))
        .map(|(idx, line)| (idx + 1, line))
        .collect();

    if table_lines.len() < 2 {
        return Err(Error::MalformedTable {
            path: source.to_path_buf(),
        });
    }

    let columns: Vec<Column> = split_cells(table_lines[0].1)
        .into_iter()
        .enumerate()
        .map(|(i, name)| Column::new(name, i))
        .collect();

    let mut table = Table::new(columns, source);

    // table_lines[1] is the separator row, skipped without validation
    for &(line_no, line) in &table_lines[2..] {
        table.push_row(split_cells(line), line_no);
    }

    let duplicate_check = check_duplicates.map(|column| check_column(&table, column));

    Ok(ParseOutcome {
        table,
        duplicate_check,
    })
}

/// Split a table line on `|`, dropping the empty fragments produced by the
/// leading and trailing pipes, and trimming the interior cells.
fn split_cells(line: &str) -> Vec<String> {
    let fragments: Vec<&str> = line.split('|').collect();
    fragments[1..fragments.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn check_column(table: &Table, column: &str) -> DuplicateCheck {
    match table.column_index(column) {
        None => DuplicateCheck::UnknownColumn {
            requested: column.to_string(),
            available: table.column_names(),
        },
        Some(index) => DuplicateCheck::Checked {
            column: column.to_string(),
            groups: duplicate_groups(table.column_values(index)),
        },
    }
}
