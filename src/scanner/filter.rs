use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{HeaderGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Selects files whose base name ends with a suffix, minus exclude globs.
///
/// Suffix matching is on the base name, not `Path::extension`, so a suffix
/// like `.generated.swift` works too.
pub struct SuffixFilter {
    suffix: String,
    exclude_patterns: GlobSet,
}

impl SuffixFilter {
    /// Create a new filter with the given suffix and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(suffix: impl Into<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| HeaderGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| HeaderGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffix: suffix.into(),
            exclude_patterns,
        })
    }

    fn has_candidate_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_candidate_suffix(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
