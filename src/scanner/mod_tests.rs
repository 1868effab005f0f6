use std::path::Path;

use tempfile::TempDir;

use super::*;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

struct SwiftOnlyFilter;

impl FileFilter for SwiftOnlyFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "swift")
    }
}

#[test]
fn scanner_finds_files_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("A.swift"), "//\n//  A.swift\n").unwrap();
    std::fs::write(temp_dir.path().join("B.swift"), "//\n//  B.swift\n").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 2);
}

#[test]
fn scanner_finds_files_in_nested_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    let deep = temp_dir.path().join("a/b/c");
    std::fs::create_dir_all(&deep).unwrap();
    std::fs::write(deep.join("D.swift"), "//\n//  Wrong.swift\n").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("D.swift"));
}

#[test]
fn scanner_respects_filter() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("A.swift"), "").unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

    let scanner = DirectoryScanner::new(SwiftOnlyFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("A.swift"));
}

#[test]
fn scanner_accepts_single_file_root() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("A.swift");
    std::fs::write(&file, "").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(&file).unwrap();

    assert_eq!(files, vec![file]);
}

#[test]
fn scanner_errors_on_missing_root() {
    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let result = scanner.scan(Path::new("/nonexistent/header-guard-root"));
    assert!(result.is_err());
}

#[test]
fn scan_order_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["C.swift", "A.swift", "B.swift"] {
        std::fs::write(temp_dir.path().join(name), "").unwrap();
    }

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let first = scanner.scan(temp_dir.path()).unwrap();
    let second = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn scan_all_combines_roots() {
    let temp_dir1 = TempDir::new().unwrap();
    let temp_dir2 = TempDir::new().unwrap();
    std::fs::write(temp_dir1.path().join("A.swift"), "").unwrap();
    std::fs::write(temp_dir2.path().join("B.swift"), "").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let paths = vec![
        temp_dir1.path().to_path_buf(),
        temp_dir2.path().to_path_buf(),
    ];
    let files = scanner.scan_all(&paths).unwrap();

    assert_eq!(files.len(), 2);
}
