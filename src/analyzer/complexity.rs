use serde::Serialize;

use super::FunctionUnit;
use super::syntax::{SyntaxKind, SyntaxNode};

/// Compute the cognitive complexity of a function unit.
#[must_use]
pub fn score(unit: &FunctionUnit) -> u32 {
    score_body(unit.body(), unit.name())
}

/// Compute the cognitive complexity of `body`, treating calls to
/// `function_name` as self-recursion.
///
/// Walks an explicit stack of `(node, depth)` frames; additions saturate.
#[must_use]
pub fn score_body(body: &SyntaxNode, function_name: &str) -> u32 {
    let mut score: u32 = 0;
    let mut stack = vec![(body, 0_u32)];

    while let Some((node, depth)) = stack.pop() {
        let (delta, child_depth) = match &node.kind {
            SyntaxKind::Conditional | SyntaxKind::Loop | SyntaxKind::ExceptionHandler => {
                let increment = depth.saturating_add(1);
                (increment, increment)
            }
            SyntaxKind::ResourceScope | SyntaxKind::Ternary => (1, depth),
            SyntaxKind::BooleanChain { operands } => {
                let extra = operands.saturating_sub(1);
                (u32::try_from(extra).unwrap_or(u32::MAX), depth)
            }
            SyntaxKind::Call { callee } if callee.as_deref() == Some(function_name) => (2, depth),
            SyntaxKind::Call { .. } | SyntaxKind::Other => (0, depth),
        };
        score = score.saturating_add(delta);
        stack.extend(node.children.iter().rev().map(|child| (child, child_depth)));
    }

    score
}

/// Readability bucket derived from a complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl Severity {
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            0..=5 => Self::Simple,
            6..=10 => Self::Moderate,
            11..=15 => Self::Complex,
            _ => Self::VeryComplex,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::VeryComplex => "very_complex",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Simple => "🟢",
            Self::Moderate => "🟡",
            Self::Complex => "🟠",
            Self::VeryComplex => "🔴",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Simple => "Simple - Easy to understand",
            Self::Moderate => "Moderate - Reasonably clear",
            Self::Complex => "Complex - Requires careful reading",
            Self::VeryComplex => "Very Complex - Consider refactoring",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "complexity_tests.rs"]
mod tests;
