//! Human-readable rendering of parse and diff findings

mod terminal;

use std::io;

use termcolor::{ColorChoice, StandardStream};

use crate::diff::DiffReport;
use crate::parser::DuplicateCheck;

pub use terminal::TerminalReport;

/// Print a duplicate check to stderr
pub fn print_duplicate_check(check: &DuplicateCheck) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    TerminalReport::new().render_duplicate_check(check, &mut stderr)
}

/// Print a diff report to stdout
pub fn print_diff_report(report: &DiffReport) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    TerminalReport::new().render_diff(report, &mut stdout)
}
