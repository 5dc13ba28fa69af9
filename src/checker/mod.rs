mod report;
mod result;
mod threshold;

pub use report::ScanReport;
pub use result::{ComplexityResult, FileResult};
pub use threshold::ThresholdChecker;

pub trait Checker {
    /// Classify the scored functions of one file.
    ///
    /// `path` is the display path (relative, `/`-separated).
    fn check(&self, path: String, functions: Vec<ComplexityResult>) -> FileResult;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
