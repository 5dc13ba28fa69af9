use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::*;
use crate::CognitiveGuardError;

fn git(dir: &Path, args: &[&str]) {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
}

fn create_git_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init"]);
    git(dir.path(), &["config", "user.email", "test@test.com"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    dir
}

fn create_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

#[test]
fn discover_finds_git_repo() {
    let dir = create_git_repo();
    let staged = GitStaged::discover(dir.path()).unwrap();

    assert_eq!(
        staged.workdir().canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}

#[test]
fn discover_fails_for_missing_path() {
    let result = GitStaged::discover(Path::new("/nonexistent/path/that/does/not/exist"));
    assert!(matches!(result, Err(CognitiveGuardError::Git(_))));
}

#[test]
fn repo_without_commits_reports_every_index_entry() {
    let dir = create_git_repo();
    create_file(dir.path(), "app.py", "def f():\n    pass\n");
    create_file(dir.path(), "pkg/util.py", "def g():\n    pass\n");
    git(dir.path(), &["add", "."]);

    let staged = GitStaged::discover(dir.path())
        .unwrap()
        .staged_files()
        .unwrap();

    assert_eq!(
        staged,
        vec![PathBuf::from("app.py"), PathBuf::from("pkg/util.py")]
    );
}

#[test]
fn only_changed_entries_are_staged_after_commit() {
    let dir = create_git_repo();
    create_file(dir.path(), "kept.py", "x = 1\n");
    create_file(dir.path(), "edited.py", "x = 1\n");
    git(dir.path(), &["add", "."]);
    git(dir.path(), &["commit", "-m", "initial"]);

    create_file(dir.path(), "edited.py", "x = 2\n");
    create_file(dir.path(), "added.py", "y = 1\n");
    git(dir.path(), &["add", "edited.py", "added.py"]);

    let staged = GitStaged::discover(dir.path())
        .unwrap()
        .staged_files()
        .unwrap();

    assert_eq!(
        staged,
        vec![PathBuf::from("added.py"), PathBuf::from("edited.py")]
    );
}

#[test]
fn unstaged_changes_are_ignored() {
    let dir = create_git_repo();
    create_file(dir.path(), "main.py", "x = 1\n");
    git(dir.path(), &["add", "."]);
    git(dir.path(), &["commit", "-m", "initial"]);

    create_file(dir.path(), "main.py", "x = 2\n");
    create_file(dir.path(), "untracked.py", "y = 1\n");

    let staged = GitStaged::discover(dir.path())
        .unwrap()
        .staged_files()
        .unwrap();

    assert!(staged.is_empty());
}
