use std::path::Path;

use globset::{GlobSet, GlobSetBuilder};

use crate::error::{BiteSizedError, Result};

use super::build_glob;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Rejects paths matching any of the `--excludes` globs.
pub struct ExcludeFilter {
    exclude_patterns: GlobSet,
}

impl ExcludeFilter {
    /// Create a new filter from exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new<S: AsRef<str>>(exclude_patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            builder.add(build_glob(pattern.as_ref())?);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| BiteSizedError::InvalidGlob {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ExcludeFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
