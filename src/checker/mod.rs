mod outcome;

pub use outcome::{CheckOutcome, SkipReason};

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{HeaderGuardError, Result};

/// Line index of the header comment. Line 0 is never inspected.
const HEADER_LINE_INDEX: usize = 1;

/// Policy for candidate files with fewer than two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortFilePolicy {
    /// Not a candidate for comparison; recorded as skipped.
    #[default]
    Skip,
    /// Abort the run with an error naming the file.
    Fail,
}

/// The filename-header rule: the second line of a candidate file is a
/// comment declaring the file's own base name after a fixed-width marker.
pub struct HeaderRule {
    marker_width: usize,
    short_files: ShortFilePolicy,
}

impl HeaderRule {
    #[must_use]
    pub fn new(marker: &str, short_files: ShortFilePolicy) -> Self {
        Self {
            marker_width: marker.chars().count(),
            short_files,
        }
    }

    /// Check a file's content against the rule.
    ///
    /// # Errors
    /// Returns `HeaderMissing` when the file has no header line and the
    /// short-file policy is `Fail`.
    pub fn check(&self, path: &Path, content: &str) -> Result<CheckOutcome> {
        let Some(line) = content.lines().nth(HEADER_LINE_INDEX) else {
            return match self.short_files {
                ShortFilePolicy::Skip => Ok(CheckOutcome::Skipped {
                    path: path.to_path_buf(),
                    reason: SkipReason::TooShort,
                }),
                ShortFilePolicy::Fail => Err(HeaderGuardError::HeaderMissing {
                    path: path.to_path_buf(),
                }),
            };
        };

        let declared = self.declared_name(line);
        if declared == base_name(path) {
            Ok(CheckOutcome::Matched {
                path: path.to_path_buf(),
            })
        } else {
            Ok(CheckOutcome::Mismatched {
                path: path.to_path_buf(),
                declared,
            })
        }
    }

    /// Drops the marker prefix (counted in characters, not bytes) and trims
    /// surrounding whitespace.
    fn declared_name(&self, line: &str) -> String {
        let start = line
            .char_indices()
            .nth(self.marker_width)
            .map_or(line.len(), |(i, _)| i);
        line[start..].trim().to_string()
    }
}

/// Final path component, lossily decoded for comparison and display.
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
