//! Key-column comparison between a reference and an incoming table

use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, TableRole};
use crate::model::{duplicate_groups, normalize, DuplicateGroup, Table};
use crate::parser::load_csv;

/// A normalized key present in both tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapGroup {
    /// Normalized key shared with the reference table
    pub normalized: String,
    /// First original value seen in the incoming table
    pub representative: String,
}

/// Row counts for one comparison
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Total rows in the incoming table
    pub incoming_rows: usize,
    /// Incoming rows beyond the first occurrence of their key
    pub duplicate_rows: usize,
    /// Unique normalized keys present in both tables
    pub overlapping_keys: usize,
    /// Rows in the final new-row table
    pub new_rows: usize,
}

/// Result of comparing an incoming table against a reference table
#[derive(Debug)]
pub struct DiffReport {
    /// Key column the comparison ran on
    pub column: String,
    /// Incoming rows whose key is absent from the reference, deduplicated
    pub new_rows: Table,
    /// Keys occurring more than once in the incoming table
    pub duplicates: Vec<DuplicateGroup>,
    /// Keys already present in the reference table
    pub overlaps: Vec<OverlapGroup>,
    /// Row counts
    pub stats: DiffStats,
}

impl DiffReport {
    /// True when the incoming table had duplicate or overlapping keys
    pub fn has_findings(&self) -> bool {
        !self.duplicates.is_empty() || !self.overlaps.is_empty()
    }
}

/// Load both tables from CSV files and diff them on `column`
pub fn compare_tables(
    reference_path: impl AsRef<Path>,
    incoming_path: impl AsRef<Path>,
    column: &str,
) -> Result<DiffReport> {
    let reference = load_csv(reference_path)?;
    let incoming = load_csv(incoming_path)?;
    diff_tables(&reference, &incoming, column)
}

/// Diff `incoming` against `reference` on `column`.
///
/// Keeps the incoming rows whose normalized key is absent from the reference
/// table, then deduplicates them by key (first occurrence wins, original row
/// order preserved). Duplicate and overlap diagnostics are computed over the
/// full incoming table, before either filter.
pub fn diff_tables(reference: &Table, incoming: &Table, column: &str) -> Result<DiffReport> {
    let ref_col = require_column(reference, column, TableRole::Reference)?;
    let inc_col = require_column(incoming, column, TableRole::Incoming)?;

    let reference_keys: FxHashSet<String> =
        reference.column_values(ref_col).map(normalize).collect();
    let incoming_keys: Vec<String> = incoming.column_values(inc_col).map(normalize).collect();

    let duplicates = duplicate_groups(incoming.column_values(inc_col));

    // Unique overlapping keys, in first-appearance order
    let mut overlapping: IndexMap<&str, &str> = IndexMap::new();
    for (row, key) in incoming.rows.iter().zip(&incoming_keys) {
        if reference_keys.contains(key.as_str()) && !overlapping.contains_key(key.as_str()) {
            overlapping.insert(key.as_str(), row.get(inc_col).unwrap_or(""));
        }
    }
    let overlaps: Vec<OverlapGroup> = overlapping
        .iter()
        .map(|(normalized, representative)| OverlapGroup {
            normalized: normalized.to_string(),
            representative: representative.to_string(),
        })
        .collect();

    // Overlap filter first, then first-wins dedup
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut new_rows = Table::new(incoming.columns.clone(), incoming.source.clone());
    for (row, key) in incoming.rows.iter().zip(&incoming_keys) {
        if !reference_keys.contains(key.as_str()) && seen.insert(key.as_str()) {
            new_rows.push_row(row.cells.clone(), row.source_line);
        }
    }

    let unique_incoming: FxHashSet<&str> = incoming_keys.iter().map(String::as_str).collect();
    let stats = DiffStats {
        incoming_rows: incoming.row_count(),
        duplicate_rows: incoming.row_count() - unique_incoming.len(),
        overlapping_keys: overlaps.len(),
        new_rows: new_rows.row_count(),
    };

    Ok(DiffReport {
        column: column.to_string(),
        new_rows,
        duplicates,
        overlaps,
        stats,
    })
}

fn require_column(table: &Table, column: &str, role: TableRole) -> Result<usize> {
    table.column_index(column).ok_or_else(|| Error::MissingColumn {
        column: column.to_string(),
        table: role,
        path: table.source.clone(),
        available: table.column_names(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::load_csv_str;
    use std::io::Write as _;

    fn table(content: &str, name: &str) -> Table {
        load_csv_str(content, name).unwrap()
    }

    #[test]
    fn test_new_rows_case_and_whitespace_insensitive() {
        let reference = table("Word\napple\nBanana\n", "ref.csv");
        let incoming = table("Word\nAPPLE\ncherry\nbanana \n", "in.csv");

        let report = diff_tables(&reference, &incoming, "Word").unwrap();

        assert_eq!(report.new_rows.row_count(), 1);
        assert_eq!(report.new_rows.rows[0].cells, vec!["cherry"]);
        assert_eq!(report.overlaps.len(), 2);
        assert_eq!(report.overlaps[0].representative, "APPLE");
        assert_eq!(report.overlaps[1].representative, "banana ");
        assert_eq!(report.stats.overlapping_keys, 2);
        assert_eq!(report.stats.new_rows, 1);
        assert!(report.has_findings());
    }

    #[test]
    fn test_duplicates_reported_on_full_incoming() {
        let reference = table("Word\napple\n", "ref.csv");
        let incoming = table("Word\napple\nApple\ncherry\nCherry\n", "in.csv");

        let report = diff_tables(&reference, &incoming, "Word").unwrap();

        // both groups, including the one that overlaps the reference
        assert_eq!(report.duplicates.len(), 2);
        assert_eq!(report.duplicates[0].normalized, "apple");
        assert_eq!(report.duplicates[0].count, 2);
        assert_eq!(report.duplicates[1].normalized, "cherry");
        assert_eq!(report.stats.duplicate_rows, 2);

        // overlap filter runs before dedup: apple drops entirely, cherry
        // keeps its first occurrence
        assert_eq!(report.new_rows.row_count(), 1);
        assert_eq!(report.new_rows.rows[0].cells, vec!["cherry"]);
    }

    #[test]
    fn test_first_occurrence_wins_in_dedup() {
        let reference = table("Word\n", "ref.csv");
        let incoming = table("Word,Note\nCherry,first\ncherry,second\n", "in.csv");

        let report = diff_tables(&reference, &incoming, "Word").unwrap();

        assert_eq!(report.new_rows.row_count(), 1);
        assert_eq!(report.new_rows.rows[0].cells, vec!["Cherry", "first"]);
    }

    #[test]
    fn test_column_order_preserved_in_new_rows() {
        let reference = table("Word,Pinyin\n", "ref.csv");
        let incoming = table("Pinyin,Word\nli,pear\n", "in.csv");

        let report = diff_tables(&reference, &incoming, "Word").unwrap();

        assert_eq!(report.new_rows.column_names(), vec!["Pinyin", "Word"]);
        assert_eq!(report.new_rows.rows[0].cells, vec!["li", "pear"]);
    }

    #[test]
    fn test_missing_column_names_table_and_columns() {
        let reference = table("Word\napple\n", "ref.csv");
        let incoming = table("Term,Note\napple,x\n", "in.csv");

        let err = diff_tables(&reference, &incoming, "Word").unwrap_err();
        match err {
            Error::MissingColumn {
                column,
                table: role,
                available,
                ..
            } => {
                assert_eq!(column, "Word");
                assert_eq!(role, TableRole::Incoming);
                assert_eq!(available, vec!["Term", "Note"]);
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_diff_is_idempotent_on_new_rows() {
        let reference = table("Word\napple\n", "ref.csv");
        let incoming = table("Word\nApple\ncherry\nCHERRY\ndate\n", "in.csv");

        let report = diff_tables(&reference, &incoming, "Word").unwrap();
        assert_eq!(report.stats.new_rows, 2);

        // fold the new rows back into the reference and diff again
        let mut merged = reference.clone();
        for row in &report.new_rows.rows {
            merged.push_row(row.cells.clone(), row.source_line);
        }

        let rerun = diff_tables(&merged, &incoming, "Word").unwrap();
        assert_eq!(rerun.stats.new_rows, 0);
        assert!(rerun.new_rows.is_empty());
    }

    #[test]
    fn test_compare_tables_end_to_end() {
        let mut reference = tempfile::NamedTempFile::new().unwrap();
        reference.write_all(b"Word,Pinyin\napple,ping guo\n").unwrap();
        let mut incoming = tempfile::NamedTempFile::new().unwrap();
        incoming
            .write_all(b"Word,Pinyin\nApple,ping guo\npear,li\n")
            .unwrap();

        let report = compare_tables(reference.path(), incoming.path(), "Word").unwrap();

        assert_eq!(report.stats.incoming_rows, 2);
        assert_eq!(report.stats.overlapping_keys, 1);
        assert_eq!(report.stats.new_rows, 1);
        assert_eq!(report.new_rows.rows[0].cells, vec!["pear", "li"]);
        assert_eq!(report.new_rows.source, incoming.path());
    }
}
