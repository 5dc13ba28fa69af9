#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the cognitive-guard binary.
#[macro_export]
macro_rules! cognitive_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("cognitive-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.cognitive-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".cognitive-guard.toml", content);
    }

    /// Runs `git` in the temp directory, returning whether it succeeded.
    ///
    /// Tests that need a repository skip themselves when git is unavailable.
    pub fn git(&self, args: &[&str]) -> bool {
        StdCommand::new("git")
            .args(args)
            .current_dir(self.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .output()
            .is_ok_and(|out| out.status.success())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Five nested conditionals: 1 + 2 + 3 + 4 + 5 = 15.
pub const COMPLEX_PY: &str = r"
def tangled(a, b, c, d, e):
    if a:
        if b:
            if c:
                if d:
                    if e:
                        return 1
    return 0
";

/// Same as [`COMPLEX_PY`] but with a docstring.
pub const DOCUMENTED_COMPLEX_PY: &str = r#"
def tangled(a, b, c, d, e):
    """Walk every flag."""
    if a:
        if b:
            if c:
                if d:
                    if e:
                        return 1
    return 0
"#;

pub const SIMPLE_PY: &str = "def add(a, b):\n    return a + b\n";

/// Three nested conditionals: 1 + 2 + 3 = 6.
pub const NESTED_JS: &str = r"
function route(a, b, c) {
  if (a) {
    if (b) {
      if (c) {
        return 1;
      }
    }
  }
  return 0;
}
";
