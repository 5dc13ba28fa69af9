use crate::config::Config;

use super::{Checker, ComplexityResult, FileResult};

/// Flags functions over the complexity threshold that lack documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdChecker {
    threshold: u32,
}

impl ThresholdChecker {
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.complexity_threshold)
    }

    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub const fn is_violation(&self, result: &ComplexityResult) -> bool {
        result.complexity > self.threshold && !result.has_documentation
    }
}

impl Checker for ThresholdChecker {
    fn check(&self, path: String, functions: Vec<ComplexityResult>) -> FileResult {
        FileResult::new(path, functions, |result| self.is_violation(result))
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
