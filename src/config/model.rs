use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;
pub const DEFAULT_MAX_LINES_IN_FILE: usize = 2000;

/// Contents of a `.bite-sized.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,
}

/// The `[check]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Glob patterns of the files to be inspected.
    #[serde(default)]
    pub inputs: Vec<String>,

    /// Glob patterns of the files to be excluded from inspection.
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Lines matching any of these regular expressions skip the length check.
    #[serde(default)]
    pub ignore_lines_matching: Vec<String>,

    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    #[serde(default = "default_max_lines_in_file")]
    pub max_lines_in_file: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            excludes: Vec::new(),
            ignore_lines_matching: Vec::new(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            max_lines_in_file: DEFAULT_MAX_LINES_IN_FILE,
        }
    }
}

const fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

const fn default_max_lines_in_file() -> usize {
    DEFAULT_MAX_LINES_IN_FILE
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
