mod filter;

pub use filter::{FileFilter, IgnoreFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CognitiveGuardError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return matching file paths relative to `root`.
    ///
    /// # Errors
    /// Returns an error if `root` is not a readable directory.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Walks a directory tree in file-name order.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || self.filter.should_descend(relative(root, e.path()))
            })
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| relative(root, e.path()).to_path_buf())
            .filter(|p| self.filter.should_include(p))
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = std::fs::metadata(root).map_err(|source| CognitiveGuardError::FileRead {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(CognitiveGuardError::Config(format!(
                "Scan root is not a directory: {}",
                root.display()
            )));
        }
        Ok(self.scan_impl(root))
    }
}

fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
