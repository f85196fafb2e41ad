//! Table, Row, and Column data structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Column metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (from header, kept verbatim)
    pub name: String,
    /// Column index (0-based position)
    pub index: usize,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// A row in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<String>,
    /// Original line number in the source file (1-indexed)
    pub source_line: usize,
}

impl Row {
    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// A table containing columns and rows
#[derive(Debug, Clone)]
pub struct Table {
    /// Column definitions, in header order
    pub columns: Vec<Column>,
    /// All rows in the table
    pub rows: Vec<Row>,
    /// File (or synthetic name) the table was read from
    pub source: PathBuf,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>, source: impl Into<PathBuf>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            source: source.into(),
        }
    }

    /// Add a row, forcing it to the header width: short rows are padded with
    /// empty cells, long rows are truncated.
    pub fn push_row(&mut self, mut cells: Vec<String>, source_line: usize) {
        cells.resize(self.columns.len(), String::new());
        self.rows.push(Row { cells, source_line });
    }

    /// Get column index by name; duplicate names resolve to the first match
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Column names in header order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Values of one column, in row order
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |r| r.get(index).unwrap_or(""))
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<Column> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(*name, i))
            .collect()
    }

    #[test]
    fn test_push_row_pads_short_rows() {
        let mut table = Table::new(columns(&["a", "b", "c"]), "test");
        table.push_row(vec!["1".to_string()], 2);

        assert_eq!(table.rows[0].cells, vec!["1", "", ""]);
    }

    #[test]
    fn test_push_row_truncates_long_rows() {
        let mut table = Table::new(columns(&["a", "b"]), "test");
        table.push_row(vec!["1".to_string(), "2".to_string(), "3".to_string()], 2);

        assert_eq!(table.rows[0].cells, vec!["1", "2"]);
    }

    #[test]
    fn test_column_index_resolves_first_duplicate() {
        let table = Table::new(columns(&["a", "b", "a"]), "test");

        assert_eq!(table.column_index("a"), Some(0));
        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_column_values_in_row_order() {
        let mut table = Table::new(columns(&["a", "b"]), "test");
        table.push_row(vec!["1".to_string(), "x".to_string()], 2);
        table.push_row(vec!["2".to_string(), "y".to_string()], 3);

        let values: Vec<&str> = table.column_values(1).collect();
        assert_eq!(values, vec!["x", "y"]);
    }
}
