use super::result::coverage_ratio;
use super::{ComplexityResult, FileResult};

/// Aggregated outcome of one scan invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    files: Vec<FileResult>,
}

impl ScanReport {
    #[must_use]
    pub const fn new(files: Vec<FileResult>) -> Self {
        Self { files }
    }

    #[must_use]
    pub fn files(&self) -> &[FileResult] {
        &self.files
    }

    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn total_functions(&self) -> usize {
        self.files.iter().map(FileResult::total_functions).sum()
    }

    #[must_use]
    pub fn documented_functions(&self) -> usize {
        self.files.iter().map(FileResult::documented_functions).sum()
    }

    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.files.iter().map(FileResult::violation_count).sum()
    }

    /// True when any file has at least one violation.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.files.iter().any(FileResult::has_violations)
    }

    /// Documented fraction across all files; `1.0` when no functions were found.
    #[must_use]
    pub fn coverage(&self) -> f64 {
        coverage_ratio(self.documented_functions(), self.total_functions())
    }

    /// Every violation paired with the file it was found in.
    pub fn violations(&self) -> impl Iterator<Item = (&FileResult, &ComplexityResult)> {
        self.files
            .iter()
            .flat_map(|file| file.violations().map(move |v| (file, v)))
    }
}

impl FromIterator<FileResult> for ScanReport {
    fn from_iter<I: IntoIterator<Item = FileResult>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
