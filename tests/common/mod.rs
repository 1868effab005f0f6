#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the header-guard binary.
#[macro_export]
macro_rules! header_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("header-guard"))
    };
}

/// Temporary directory with helpers for laying out test source trees.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content, creating parent directories
    /// as needed.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a source file whose header declares the given name, in the
    /// Xcode template shape.
    pub fn create_source(&self, relative_path: &str, declared: &str) -> PathBuf {
        let content = format!("//\n//  {declared}\n//\n\nimport Foundation\n");
        self.create_file(relative_path, &content)
    }
}
