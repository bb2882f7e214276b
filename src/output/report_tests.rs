use std::path::Path;

use super::*;
use crate::inspector::LineTooLong;

fn record(lines: &[(usize, usize)], line_count: usize) -> InspectionRecord {
    let lines = lines
        .iter()
        .map(|&(n, len)| LineTooLong::try_new(n, len).unwrap())
        .collect();
    InspectionRecord::new(lines, line_count).unwrap()
}

fn render(record: &InspectionRecord, max_line_length: usize, max_lines: usize) -> (bool, String) {
    let mut out = Vec::new();
    let passed = report(
        Path::new("Program.cs"),
        record,
        max_line_length,
        max_lines,
        &mut out,
    )
    .unwrap();
    (passed, String::from_utf8(out).unwrap())
}

#[test]
fn report_ok() {
    let (passed, output) = render(&record(&[], 10), 120, 1984);

    assert!(passed);
    assert_eq!(output, format!("OK   Program.cs{NEWLINE}"));
}

#[test]
fn report_ok_at_exact_line_limit() {
    let (passed, output) = render(&record(&[], 1984), 120, 1984);
    assert!(passed);
    assert!(output.starts_with("OK   "));
}

#[test]
fn report_lines_too_long() {
    let (passed, output) = render(&record(&[(3, 123)], 10), 13, 1984);

    assert!(!passed);
    assert_eq!(
        output,
        format!(
            "FAIL Program.cs{NEWLINE}\
             \x20 * The following line(s) have more than allowed 13 characters:{NEWLINE}\
             \x20   * Line 3: 123 characters{NEWLINE}"
        )
    );
}

#[test]
fn report_too_many_lines() {
    let (passed, output) = render(&record(&[], 10), 120, 1);

    assert!(!passed);
    assert_eq!(
        output,
        format!(
            "FAIL Program.cs{NEWLINE}\
             \x20 * The file is too long. It contains 10 line(s), but only 1 line(s) are allowed.{NEWLINE}"
        )
    );
}

#[test]
fn report_both_failures_in_order() {
    let (passed, output) = render(&record(&[(1, 5), (2, 6)], 2), 3, 1);

    assert!(!passed);
    assert_eq!(
        output,
        format!(
            "FAIL Program.cs{NEWLINE}\
             \x20 * The following line(s) have more than allowed 3 characters:{NEWLINE}\
             \x20   * Line 1: 5 characters{NEWLINE}\
             \x20   * Line 2: 6 characters{NEWLINE}\
             \x20 * The file is too long. It contains 2 line(s), but only 1 line(s) are allowed.{NEWLINE}"
        )
    );
}

#[test]
fn report_rejects_line_shorter_than_limit() {
    let mut out = Vec::new();
    let err = report(
        Path::new("Program.cs"),
        &record(&[(1, 5)], 1),
        10,
        1984,
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, BiteSizedError::InvariantViolation(_)));
    assert!(out.is_empty(), "nothing is written on a contract violation");
}

#[test]
fn report_tolerates_length_equal_to_limit() {
    let (passed, output) = render(&record(&[(1, 10)], 1), 10, 1984);
    assert!(!passed);
    assert!(output.contains("Line 1: 10 characters"));
}

#[test]
fn ignore_summary_lists_patterns() {
    let (patterns, _) = IgnorePatterns::compile(&["^AAA", "^using "]);
    let mut out = Vec::new();

    write_ignore_summary(&patterns, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("The --ignore-lines-matching was set to: ^AAA ^using {NEWLINE}")
    );
}
