mod complexity;
mod doc_comment;
mod ecmascript;
mod python;
mod source;
mod syntax;

pub use complexity::{Severity, score, score_body};
pub use doc_comment::{DOC_BLOCK_MAX_LINES, DOC_LOOKBACK_LINES, has_leading_doc_comment};
pub use ecmascript::{Dialect, extract_ecmascript};
pub use python::extract_python;
pub use source::read_source;
pub use syntax::{SyntaxKind, SyntaxNode};

use std::path::Path;

/// One function-like declaration discovered in a source file.
#[derive(Debug, PartialEq, Eq)]
pub struct FunctionUnit {
    name: String,
    start_line: usize,
    body: SyntaxNode,
    has_documentation: bool,
}

impl FunctionUnit {
    #[must_use]
    pub const fn new(
        name: String,
        start_line: usize,
        body: SyntaxNode,
        has_documentation: bool,
    ) -> Self {
        Self {
            name,
            start_line,
            body,
            has_documentation,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starting line (1-indexed)
    #[must_use]
    pub const fn start_line(&self) -> usize {
        self.start_line
    }

    #[must_use]
    pub const fn body(&self) -> &SyntaxNode {
        &self.body
    }

    #[must_use]
    pub const fn has_documentation(&self) -> bool {
        self.has_documentation
    }
}

/// Language-specific function discovery.
pub trait Extractor {
    /// Extract function units from source text, in declaration order.
    ///
    /// Returns an empty list when the source is not valid syntax.
    fn extract(&self, source: &str) -> Vec<FunctionUnit>;

    /// Read and extract a file. Unreadable files yield an empty list.
    fn parse_file(&self, path: &Path) -> Vec<FunctionUnit> {
        read_source(path).map_or_else(Vec::new, |source| self.extract(&source))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
