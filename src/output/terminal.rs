//! Colored terminal output

use std::io;

use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::diff::DiffReport;
use crate::model::{DuplicateGroup, Table};
use crate::parser::DuplicateCheck;

/// Renders parse and diff findings for humans
pub struct TerminalReport;

impl TerminalReport {
    pub fn new() -> Self {
        Self
    }

    /// Render the outcome of a duplicate check
    pub fn render_duplicate_check(
        &self,
        check: &DuplicateCheck,
        writer: &mut dyn WriteColor,
    ) -> io::Result<()> {
        match check {
            DuplicateCheck::UnknownColumn {
                requested,
                available,
            } => {
                write_warning(writer)?;
                writeln!(
                    writer,
                    " column '{}' not found; available columns: {}",
                    requested,
                    available.join(", ")
                )?;
            }
            DuplicateCheck::Checked { column, groups } => {
                if groups.is_empty() {
                    writeln!(writer, "no duplicates found in column '{}'", column)?;
                } else {
                    write_warning(writer)?;
                    writeln!(
                        writer,
                        " found {} duplicate values in column '{}':",
                        total_occurrences(groups),
                        column
                    )?;
                    for group in groups {
                        writeln!(
                            writer,
                            "   '{}' appears {} times",
                            group.representative, group.count
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Render a full diff report: warnings, overlap listing, summary, and
    /// the new-row grid
    pub fn render_diff(&self, report: &DiffReport, writer: &mut dyn WriteColor) -> io::Result<()> {
        if !report.duplicates.is_empty() {
            write_warning(writer)?;
            writeln!(
                writer,
                " incoming table has {} duplicate values in column '{}':",
                total_occurrences(&report.duplicates),
                report.column
            )?;
            for group in &report.duplicates {
                writeln!(
                    writer,
                    "   '{}' appears {} times",
                    group.normalized, group.count
                )?;
            }
            writeln!(writer)?;
        }

        if !report.overlaps.is_empty() {
            writeln!(
                writer,
                "already in reference ({} unique values):",
                report.overlaps.len()
            )?;
            for overlap in &report.overlaps {
                writeln!(writer, "   '{}'", overlap.representative)?;
            }
            writeln!(writer)?;
        }

        writeln!(writer, "Summary:")?;
        writeln!(
            writer,
            "   total rows in incoming table: {}",
            report.stats.incoming_rows
        )?;
        writeln!(
            writer,
            "   duplicates in incoming table: {}",
            report.stats.duplicate_rows
        )?;
        writeln!(
            writer,
            "   already in reference: {}",
            report.stats.overlapping_keys
        )?;
        writeln!(writer, "   new unique rows: {}", report.stats.new_rows)?;

        if !report.new_rows.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "New rows:")?;
            writeln!(writer, "{}", render_grid(&report.new_rows))?;
        }

        Ok(())
    }
}

impl Default for TerminalReport {
    fn default() -> Self {
        Self::new()
    }
}

fn write_warning(writer: &mut dyn WriteColor) -> io::Result<()> {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Yellow)).set_bold(true);
    writer.set_color(&spec)?;
    write!(writer, "warning:")?;
    writer.reset()
}

/// Render a table as an aligned grid
fn render_grid(table: &Table) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.columns.iter().map(|c| c.name.as_str()));
    for row in &table.rows {
        builder.push_record(row.cells.iter().map(String::as_str));
    }
    builder.build().with(Style::sharp()).to_string()
}

fn total_occurrences(groups: &[DuplicateGroup]) -> usize {
    groups.iter().map(|g| g.count).sum()
}
