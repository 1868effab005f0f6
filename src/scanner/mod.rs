mod filter;

pub use filter::{FileFilter, SuffixFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{HeaderGuardError, Result};

/// Trait for scanning directories and finding candidate files.
pub trait FileScanner {
    /// Scan a directory tree and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the root does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Scan several roots and concatenate the results.
    ///
    /// # Errors
    /// Returns an error if any root does not exist.
    fn scan_all(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            files.extend(self.scan(root)?);
        }
        Ok(files)
    }
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        // Sorted walk keeps repeated runs over an unmodified tree
        // byte-identical.
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| self.filter.should_include(p))
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(HeaderGuardError::Config(format!(
                "Path does not exist: {}",
                root.display()
            )));
        }
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
