use serde::Serialize;

use crate::analyzer::{FunctionUnit, Severity, score};

/// A scored function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityResult {
    pub name: String,
    pub start_line: usize,
    pub complexity: u32,
    pub has_documentation: bool,
}

impl ComplexityResult {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start_line: usize,
        complexity: u32,
        has_documentation: bool,
    ) -> Self {
        Self {
            name: name.into(),
            start_line,
            complexity,
            has_documentation,
        }
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        Severity::from_score(self.complexity)
    }
}

impl From<&FunctionUnit> for ComplexityResult {
    fn from(unit: &FunctionUnit) -> Self {
        Self::new(
            unit.name(),
            unit.start_line(),
            score(unit),
            unit.has_documentation(),
        )
    }
}

/// Scored functions of one file plus the subset that violates the threshold.
///
/// Violations are stored as indices into `functions`, so they are always a
/// subset in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    path: String,
    functions: Vec<ComplexityResult>,
    violations: Vec<usize>,
}

impl FileResult {
    #[must_use]
    pub fn new<P>(path: String, functions: Vec<ComplexityResult>, is_violation: P) -> Self
    where
        P: Fn(&ComplexityResult) -> bool,
    {
        let violations = functions
            .iter()
            .enumerate()
            .filter(|(_, result)| is_violation(result))
            .map(|(idx, _)| idx)
            .collect();
        Self {
            path,
            functions,
            violations,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn functions(&self) -> &[ComplexityResult] {
        &self.functions
    }

    pub fn violations(&self) -> impl Iterator<Item = &ComplexityResult> {
        self.violations.iter().map(|&idx| &self.functions[idx])
    }

    #[must_use]
    pub const fn total_functions(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn documented_functions(&self) -> usize {
        self.functions.iter().filter(|f| f.has_documentation).count()
    }

    #[must_use]
    pub const fn violation_count(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub const fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Documented fraction of functions; `1.0` for a file without functions.
    #[must_use]
    pub fn coverage(&self) -> f64 {
        coverage_ratio(self.documented_functions(), self.total_functions())
    }
}

#[allow(clippy::cast_precision_loss)]
pub(super) fn coverage_ratio(documented: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    documented as f64 / total as f64
}
