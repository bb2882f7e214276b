use std::num::NonZeroUsize;

use crate::error::{BiteSizedError, Result};

/// A line whose length exceeded the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTooLong {
    line_number: NonZeroUsize,
    length: usize,
}

impl LineTooLong {
    #[must_use]
    pub const fn new(line_number: NonZeroUsize, length: usize) -> Self {
        Self {
            line_number,
            length,
        }
    }

    /// Construct from a raw, 1-based line number.
    ///
    /// # Errors
    /// Returns `InvariantViolation` if `line_number` is 0.
    pub fn try_new(line_number: usize, length: usize) -> Result<Self> {
        let line_number = NonZeroUsize::new(line_number).ok_or_else(|| {
            BiteSizedError::InvariantViolation(
                "Line numbers are indexed from 1, but got: 0".to_string(),
            )
        })?;
        Ok(Self::new(line_number, length))
    }

    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number.get()
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// Result of inspecting a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionRecord {
    lines_too_long: Vec<LineTooLong>,
    line_count: usize,
}

impl InspectionRecord {
    /// Build a record, checking that every entry lies within the file and
    /// that entries are in ascending line order.
    ///
    /// # Errors
    /// Returns `InvariantViolation` if the entries are inconsistent with `line_count`.
    pub fn new(lines_too_long: Vec<LineTooLong>, line_count: usize) -> Result<Self> {
        let mut previous = 0;
        for line in &lines_too_long {
            if line.line_number() > line_count {
                return Err(BiteSizedError::InvariantViolation(format!(
                    "Inconsistent line number and line count (== {line_count}), got: {}",
                    line.line_number()
                )));
            }
            if line.line_number() <= previous {
                return Err(BiteSizedError::InvariantViolation(format!(
                    "Line numbers must be strictly ascending, got {} after {previous}",
                    line.line_number()
                )));
            }
            previous = line.line_number();
        }

        Ok(Self::from_scan(lines_too_long, line_count))
    }

    /// Used by the inspector, which assigns each entry the number of the line
    /// just counted, so entries ascend and never exceed `line_count`. Only
    /// debug builds re-check this.
    pub(super) fn from_scan(lines_too_long: Vec<LineTooLong>, line_count: usize) -> Self {
        debug_assert!(lines_too_long.iter().all(|l| l.line_number() <= line_count));
        Self {
            lines_too_long,
            line_count,
        }
    }

    #[must_use]
    pub fn lines_too_long(&self) -> &[LineTooLong] {
        &self.lines_too_long
    }

    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// True when no line is too long and the file is within `max_lines_in_file`.
    #[must_use]
    pub fn is_clean(&self, max_lines_in_file: usize) -> bool {
        self.lines_too_long.is_empty() && self.line_count <= max_lines_in_file
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
