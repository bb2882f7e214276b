mod report;

pub use report::{NEWLINE, report, write_ignore_summary};
