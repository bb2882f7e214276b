mod record;

pub use record::{InspectionRecord, LineTooLong};

use std::io::BufRead;
use std::num::NonZeroUsize;

use crate::pattern::LineMatcher;

/// Checks lines against a maximum length, skipping lines the matcher exempts.
///
/// Line length is counted in `char`s, excluding the `\n` / `\r\n` terminator.
pub struct Inspector<'a, M: LineMatcher + ?Sized> {
    max_line_length: usize,
    ignore: &'a M,
}

impl<'a, M: LineMatcher + ?Sized> Inspector<'a, M> {
    #[must_use]
    pub const fn new(max_line_length: usize, ignore: &'a M) -> Self {
        Self {
            max_line_length,
            ignore,
        }
    }

    #[must_use]
    pub const fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Inspect already-split lines (without terminators).
    #[must_use]
    pub fn inspect_lines<I, S>(&self, lines: I) -> InspectionRecord
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scan = Scan::default();
        for line in lines {
            self.visit(&mut scan, line.as_ref());
        }
        scan.finish()
    }

    /// Inspect in-memory text. A trailing terminator does not add an empty line.
    #[must_use]
    pub fn inspect_str(&self, source: &str) -> InspectionRecord {
        self.inspect_lines(source.lines())
    }

    /// Inspect lines from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn inspect_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<InspectionRecord> {
        let mut scan = Scan::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            self.visit(&mut scan, &line);
        }

        Ok(scan.finish())
    }

    fn visit(&self, scan: &mut Scan, line: &str) {
        let line_number = NonZeroUsize::MIN.saturating_add(scan.line_count);
        scan.line_count += 1;

        let length = line.chars().count();
        if length > self.max_line_length && !self.ignore.matches(line) {
            scan.lines_too_long.push(LineTooLong::new(line_number, length));
        }
    }
}

#[derive(Default)]
struct Scan {
    lines_too_long: Vec<LineTooLong>,
    line_count: usize,
}

impl Scan {
    fn finish(self) -> InspectionRecord {
        InspectionRecord::from_scan(self.lines_too_long, self.line_count)
    }
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    match buf {
        [rest @ .., b'\r', b'\n'] | [rest @ .., b'\n'] => rest,
        _ => buf,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
