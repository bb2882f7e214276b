mod filter;

pub use filter::{ExcludeFilter, FileFilter};

use std::path::{Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobMatcher};
use indexmap::IndexSet;
use walkdir::WalkDir;

use crate::error::{BiteSizedError, Result};

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// Build a glob where `*` stays within one path component and `**` crosses directories.
pub(crate) fn build_glob(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| BiteSizedError::InvalidGlob {
            pattern: pattern.to_string(),
            source: e,
        })
}

struct InputPattern {
    /// Longest leading run of components without glob metacharacters.
    base: PathBuf,
    matcher: GlobMatcher,
    absolute: bool,
}

impl InputPattern {
    fn parse(pattern: &str) -> Result<Self> {
        let mut pattern = pattern;
        while let Some(rest) = pattern.strip_prefix("./") {
            pattern = rest;
        }

        let matcher = build_glob(pattern)?.compile_matcher();
        let absolute = Path::new(pattern).is_absolute();

        let mut base = PathBuf::new();
        for component in Path::new(pattern).components() {
            if component.as_os_str().to_string_lossy().contains(GLOB_META) {
                break;
            }
            base.push(component);
        }

        Ok(Self {
            base,
            matcher,
            absolute,
        })
    }
}

/// Resolves `--inputs` globs to files, minus whatever the filter rejects.
///
/// Relative patterns are matched against paths relative to `root` and yield
/// relative paths; absolute patterns yield absolute paths.
pub struct GlobResolver<F: FileFilter> {
    root: PathBuf,
    inputs: Vec<InputPattern>,
    filter: F,
}

impl GlobResolver<ExcludeFilter> {
    /// # Errors
    /// Returns an error if any input or exclude pattern is invalid.
    pub fn with_excludes<S: AsRef<str>, T: AsRef<str>>(
        root: &Path,
        inputs: &[S],
        excludes: &[T],
    ) -> Result<Self> {
        Self::new(root, inputs, ExcludeFilter::new(excludes)?)
    }
}

impl<F: FileFilter> GlobResolver<F> {
    /// # Errors
    /// Returns an error if any input pattern is invalid.
    pub fn new<S: AsRef<str>>(root: &Path, inputs: &[S], filter: F) -> Result<Self> {
        let inputs = inputs
            .iter()
            .map(|p| InputPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.to_path_buf(),
            inputs,
            filter,
        })
    }

    /// Matching files, input by input, each in sorted walk order. A file
    /// matched by more than one input is listed once, at its first position.
    #[must_use]
    pub fn resolve(&self) -> Vec<PathBuf> {
        let mut files = IndexSet::new();
        for input in &self.inputs {
            files.extend(self.resolve_input(input));
        }
        files.into_iter().collect()
    }

    fn resolve_input(&self, input: &InputPattern) -> Vec<PathBuf> {
        let walk_root = if input.absolute {
            input.base.clone()
        } else {
            self.root.join(&input.base)
        };

        WalkDir::new(&walk_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!(root = %walk_root.display(), error = %e, "skipping unreadable entry");
                    None
                }
            })
            // Symlinked files count; symlinked directories are not descended into.
            .filter(|e| e.path().is_file())
            .filter_map(|e| self.candidate_path(e.path(), input.absolute))
            .filter(|p| input.matcher.is_match(p))
            .filter(|p| self.filter.should_include(p))
            .collect()
    }

    fn candidate_path(&self, path: &Path, absolute: bool) -> Option<PathBuf> {
        if absolute {
            return Some(path.to_path_buf());
        }
        path.strip_prefix(&self.root).ok().map(Path::to_path_buf)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
