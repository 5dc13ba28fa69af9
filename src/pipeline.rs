//! Turns a file set into a [`ScanReport`].

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::Result;
use crate::analyzer::Extractor;
use crate::checker::{Checker, ComplexityResult, FileResult, ScanReport, ThresholdChecker};
use crate::config::Config;
use crate::git::{GitStaged, StagedFiles};
use crate::language::LanguageRegistry;
use crate::output::display_path;
use crate::scanner::{DirectoryScanner, FileScanner, IgnoreFilter};

/// Scan orchestration for one immutable [`Config`].
#[derive(Debug, Clone)]
pub struct ScanPipeline {
    registry: LanguageRegistry,
    staged_registry: LanguageRegistry,
    ignore: IgnoreFilter,
    checker: ThresholdChecker,
}

impl ScanPipeline {
    /// Build the pipeline for a config.
    ///
    /// # Errors
    /// Returns an error if an ignore pattern is not a valid glob.
    pub fn new(config: &Config) -> Result<Self> {
        let registry =
            LanguageRegistry::with_config_keys(config.languages.iter().map(String::as_str));
        let staged_registry =
            LanguageRegistry::with_config_keys(config.staged_languages.iter().map(String::as_str));
        tracing::debug!(
            "Analyzing {} ({} when staged)",
            language_names(&registry),
            language_names(&staged_registry)
        );

        Ok(Self {
            registry,
            staged_registry,
            ignore: IgnoreFilter::new(&config.ignore)?,
            checker: ThresholdChecker::from_config(config),
        })
    }

    /// Analyze a single file. Unsupported or unreadable files yield an empty result.
    #[must_use]
    pub fn scan_file(&self, path: &Path) -> FileResult {
        self.analyze(&self.registry, path, display_path(path, None))
    }

    /// Scan every supported, non-ignored file under `root`.
    ///
    /// Files without functions are left out of the report.
    ///
    /// # Errors
    /// Returns an error if `root` is not a readable directory.
    pub fn scan_all(&self, root: &Path) -> Result<ScanReport> {
        let files: Vec<PathBuf> = DirectoryScanner::new(self.ignore.clone())
            .scan(root)?
            .into_iter()
            .filter(|path| self.registry.for_path(path).is_some())
            .collect();
        tracing::debug!("Found {} candidate files under {}", files.len(), root.display());

        Ok(self.scan_paths(&self.registry, root, &files))
    }

    /// Scan the files staged in the repository containing `root`.
    ///
    /// Only `staged_languages` are analyzed. Without a usable repository the
    /// report is empty.
    #[must_use]
    pub fn scan_staged(&self, root: &Path) -> ScanReport {
        let staged = match GitStaged::discover(root) {
            Ok(staged) => staged,
            Err(e) => {
                tracing::debug!("Staged scan unavailable: {e}");
                return ScanReport::default();
            }
        };
        let paths = match staged.staged_files() {
            Ok(paths) => paths,
            Err(e) => {
                tracing::debug!("Could not read staged files: {e}");
                return ScanReport::default();
            }
        };

        let workdir = staged.workdir();
        let files: Vec<PathBuf> = paths
            .into_iter()
            .filter(|path| workdir.join(path).is_file())
            .filter(|path| !self.ignore.is_ignored(path))
            .filter(|path| self.staged_registry.for_path(path).is_some())
            .collect();
        tracing::debug!("{} staged files to analyze", files.len());

        self.scan_paths(&self.staged_registry, workdir, &files)
    }

    /// Analyze `paths` (relative to `base`) in parallel, keeping input order.
    fn scan_paths(
        &self,
        registry: &LanguageRegistry,
        base: &Path,
        paths: &[PathBuf],
    ) -> ScanReport {
        paths
            .par_iter()
            .map(|path| self.analyze(registry, &base.join(path), display_path(path, None)))
            .collect::<Vec<_>>()
            .into_iter()
            .filter(|result| result.total_functions() > 0)
            .collect()
    }

    fn analyze(&self, registry: &LanguageRegistry, path: &Path, display: String) -> FileResult {
        let Some(language) = registry.for_path(path) else {
            tracing::debug!("No analyzer for {}, skipping", path.display());
            return self.checker.check(display, Vec::new());
        };

        let functions: Vec<ComplexityResult> = language
            .parse_file(path)
            .iter()
            .map(ComplexityResult::from)
            .collect();
        self.checker.check(display, functions)
    }
}

fn language_names(registry: &LanguageRegistry) -> String {
    let names: Vec<&str> = registry.all().iter().map(|lang| lang.name()).collect();
    if names.is_empty() {
        "no languages".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
