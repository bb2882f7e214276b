use std::io::Write;
use std::path::Path;

use crate::error::{BiteSizedError, Result};
use crate::inspector::InspectionRecord;
use crate::pattern::IgnorePatterns;

#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";

/// Write the pass/fail report for one inspected file.
///
/// Returns `true` if the file passed both checks.
///
/// # Errors
/// Returns `InvariantViolation` if an entry in `record` is shorter than
/// `max_line_length` (nothing is written in that case), or an I/O error if
/// writing fails.
pub fn report<W: Write>(
    path: &Path,
    record: &InspectionRecord,
    max_line_length: usize,
    max_lines_in_file: usize,
    out: &mut W,
) -> Result<bool> {
    check_precondition(record, max_line_length)?;

    let path = path.display();

    if record.is_clean(max_lines_in_file) {
        write!(out, "OK   {path}{NEWLINE}")?;
        return Ok(true);
    }

    write!(out, "FAIL {path}{NEWLINE}")?;

    if !record.lines_too_long().is_empty() {
        write!(
            out,
            "  * The following line(s) have more than allowed {max_line_length} characters:{NEWLINE}"
        )?;
        for line in record.lines_too_long() {
            write!(
                out,
                "    * Line {}: {} characters{NEWLINE}",
                line.line_number(),
                line.length()
            )?;
        }
    }

    if record.line_count() > max_lines_in_file {
        write!(
            out,
            "  * The file is too long. It contains {} line(s), \
             but only {max_lines_in_file} line(s) are allowed.{NEWLINE}",
            record.line_count()
        )?;
    }

    Ok(false)
}

/// Tell the reader which ignore patterns were in effect.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_ignore_summary<W: Write>(patterns: &IgnorePatterns, out: &mut W) -> Result<()> {
    write!(
        out,
        "The --ignore-lines-matching was set to: {patterns}{NEWLINE}"
    )?;
    Ok(())
}

// A length equal to the limit is tolerated here, matching the inspector's
// strict "greater than" trigger.
fn check_precondition(record: &InspectionRecord, max_line_length: usize) -> Result<()> {
    if let Some(line) = record
        .lines_too_long()
        .iter()
        .find(|line| line.length() < max_line_length)
    {
        return Err(BiteSizedError::InvariantViolation(format!(
            "Invalid line length on line {}: expected at least max line length (== {max_line_length}), but got: {}",
            line.line_number(),
            line.length()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
