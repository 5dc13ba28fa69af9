use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPLEXITY_THRESHOLD: u32 = 10;
pub const MIN_COMPLEXITY_THRESHOLD: u32 = 1;
pub const MAX_COMPLEXITY_THRESHOLD: u32 = 20;
pub const DEFAULT_TARGET_COVERAGE: f64 = 0.9;

/// Settings for a scan. Read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Functions scoring above this and lacking documentation are violations.
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: u32,

    /// Documentation coverage (0.0-1.0) the text report treats as healthy.
    #[serde(default = "default_target_coverage")]
    pub target_coverage: f64,

    /// Enabled language keys (`python`, `javascript`, `typescript`).
    #[serde(default = "default_languages")]
    pub languages: IndexSet<String>,

    /// Glob patterns for paths to skip.
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Language keys analyzed in `--staged` mode.
    #[serde(default = "default_staged_languages")]
    pub staged_languages: IndexSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            complexity_threshold: default_complexity_threshold(),
            target_coverage: default_target_coverage(),
            languages: default_languages(),
            ignore: default_ignore(),
            staged_languages: default_staged_languages(),
        }
    }
}

const fn default_complexity_threshold() -> u32 {
    DEFAULT_COMPLEXITY_THRESHOLD
}

const fn default_target_coverage() -> f64 {
    DEFAULT_TARGET_COVERAGE
}

fn default_languages() -> IndexSet<String> {
    ["python", "javascript", "typescript"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_ignore() -> Vec<String> {
    vec![
        "**/test_*.py".to_string(),
        "**/*.test.js".to_string(),
        "**/migrations/**".to_string(),
        "**/node_modules/**".to_string(),
    ]
}

fn default_staged_languages() -> IndexSet<String> {
    IndexSet::from(["python".to_string()])
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
