use std::path::{Component, Path};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CognitiveGuardError, Result};

pub trait FileFilter {
    /// Whether a file (path relative to the scan root) should be scanned.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether a directory (path relative to the scan root) should be walked.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

/// Permissive ignore matching over configured glob patterns.
///
/// A path is ignored when any pattern matches it by one of:
/// 1. a glob match against the whole relative path,
/// 2. a match against the file name once a leading `**/` is stripped,
/// 3. a match against any single path component once `**/` and `/**` are
///    removed from the pattern.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    full_path: GlobSet,
    file_name: GlobSet,
    component: GlobSet,
}

impl IgnoreFilter {
    /// Compile the ignore patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut full_path = GlobSetBuilder::new();
        let mut file_name = GlobSetBuilder::new();
        let mut component = GlobSetBuilder::new();

        for pattern in patterns {
            full_path.add(compile(pattern, pattern)?);
            if let Some(simple) = pattern.strip_prefix("**/") {
                file_name.add(compile(simple, pattern)?);
            }
            let bare = pattern.replace("**/", "").replace("/**", "");
            if !bare.is_empty() {
                component.add(compile(&bare, pattern)?);
            }
        }

        Ok(Self {
            full_path: build(&full_path)?,
            file_name: build(&file_name)?,
            component: build(&component)?,
        })
    }

    /// Whether `path` (relative to the scan root) matches any ignore pattern.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        self.full_path.is_match(path)
            || path
                .file_name()
                .is_some_and(|name| self.file_name.is_match(name))
            || self.has_ignored_component(path)
    }

    fn has_ignored_component(&self, path: &Path) -> bool {
        path.components().any(|part| match part {
            Component::Normal(part) => self.component.is_match(part),
            _ => false,
        })
    }
}

impl FileFilter for IgnoreFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.is_ignored(path)
    }

    // Only the component check is safe for pruning: every file below an
    // ignored component is itself ignored.
    fn should_descend(&self, dir: &Path) -> bool {
        !self.has_ignored_component(dir)
    }
}

fn compile(glob: &str, pattern: &str) -> Result<Glob> {
    Glob::new(glob).map_err(|e| CognitiveGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

fn build(builder: &GlobSetBuilder) -> Result<GlobSet> {
    builder
        .build()
        .map_err(|e| CognitiveGuardError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
