use std::fmt;

use regex::Regex;

use crate::error::BiteSizedError;

/// Decides whether a line is exempt from the length check.
pub trait LineMatcher {
    fn matches(&self, line: &str) -> bool;
}

impl LineMatcher for Regex {
    fn matches(&self, line: &str) -> bool {
        self.is_match(line)
    }
}

impl<M: LineMatcher> LineMatcher for [M] {
    fn matches(&self, line: &str) -> bool {
        self.iter().any(|m| m.matches(line))
    }
}

/// Compiled `--ignore-lines-matching` patterns, in the order they were given.
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    patterns: Vec<Regex>,
}

impl IgnorePatterns {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compile every source. Sources that fail to compile are left out and
    /// handed back as errors so the caller can warn and carry on.
    #[must_use]
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> (Self, Vec<BiteSizedError>) {
        let mut patterns = Vec::with_capacity(sources.len());
        let mut rejected = Vec::new();

        for source in sources {
            let source = source.as_ref();
            match Regex::new(source) {
                Ok(regex) => patterns.push(regex),
                Err(e) => rejected.push(BiteSizedError::InvalidRegex {
                    pattern: source.to_string(),
                    source: e,
                }),
            }
        }

        (Self { patterns }, rejected)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Regex> {
        self.patterns.iter()
    }
}

impl LineMatcher for IgnorePatterns {
    fn matches(&self, line: &str) -> bool {
        self.patterns.as_slice().matches(line)
    }
}

impl fmt::Display for IgnorePatterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(pattern.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
