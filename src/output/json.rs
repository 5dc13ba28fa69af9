use serde::Serialize;

use crate::analyzer::Severity;
use crate::checker::{FileResult, ScanReport};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

/// Stable serialized form of a [`ScanReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonReport {
    pub total_files: usize,
    pub total_functions: usize,
    pub coverage: f64,
    pub violations: usize,
    pub files: Vec<JsonFileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonFileEntry {
    pub path: String,
    pub functions: usize,
    pub documented: usize,
    pub violations: Vec<JsonViolation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonViolation {
    pub function: String,
    pub line: usize,
    pub complexity: u32,
    pub severity: Severity,
}

impl From<&ScanReport> for JsonReport {
    fn from(report: &ScanReport) -> Self {
        Self {
            total_files: report.total_files(),
            total_functions: report.total_functions(),
            coverage: report.coverage(),
            violations: report.total_violations(),
            files: report.files().iter().map(JsonFileEntry::from).collect(),
        }
    }
}

impl From<&FileResult> for JsonFileEntry {
    fn from(file: &FileResult) -> Self {
        Self {
            path: file.path().to_string(),
            functions: file.total_functions(),
            documented: file.documented_functions(),
            violations: file
                .violations()
                .map(|v| JsonViolation {
                    function: v.name.clone(),
                    line: v.start_line,
                    complexity: v.complexity,
                    severity: v.severity(),
                })
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(&JsonReport::from(report))?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
