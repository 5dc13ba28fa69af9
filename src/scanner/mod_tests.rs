use std::path::{Path, PathBuf};

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

struct PythonOnlyFilter;

impl FileFilter for PythonOnlyFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "py")
    }
}

#[test]
fn scanner_finds_files_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("main.py"), "def main(): pass").unwrap();
    std::fs::write(temp_dir.path().join("lib.py"), "def foo(): pass").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files, vec![PathBuf::from("lib.py"), PathBuf::from("main.py")]);
}

#[test]
fn scanner_returns_paths_relative_to_root() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("src");
    std::fs::create_dir(&sub_dir).unwrap();
    std::fs::write(sub_dir.join("main.py"), "").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files, vec![Path::new("src").join("main.py")]);
}

#[test]
fn scanner_respects_filter() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("app.py"), "").unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

    let scanner = DirectoryScanner::new(PythonOnlyFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files, vec![PathBuf::from("app.py")]);
}

#[test]
fn scanner_order_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["b", "a", "c"] {
        let dir = temp_dir.path().join(name);
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("x.py"), "").unwrap();
    }

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(
        files,
        vec![
            Path::new("a").join("x.py"),
            Path::new("b").join("x.py"),
            Path::new("c").join("x.py"),
        ]
    );
}

#[test]
fn scanner_skips_ignored_directories() {
    let temp_dir = TempDir::new().unwrap();
    let modules = temp_dir.path().join("node_modules").join("pkg");
    std::fs::create_dir_all(&modules).unwrap();
    std::fs::write(modules.join("index.js"), "").unwrap();
    std::fs::write(temp_dir.path().join("app.js"), "").unwrap();

    let filter = IgnoreFilter::new(&["**/node_modules/**".to_string()]).unwrap();
    let files = DirectoryScanner::new(filter).scan(temp_dir.path()).unwrap();

    assert_eq!(files, vec![PathBuf::from("app.js")]);
}

#[test]
fn scanner_missing_root_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let result = DirectoryScanner::new(AcceptAllFilter).scan(&missing);
    assert!(matches!(result, Err(CognitiveGuardError::FileRead { .. })));
}

#[test]
fn scanner_root_that_is_a_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("one.py");
    std::fs::write(&file, "").unwrap();

    let result = DirectoryScanner::new(AcceptAllFilter).scan(&file);
    assert!(result.is_err());
}
