use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CognitiveGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),
}

impl CognitiveGuardError {
    /// Whether this error comes from configuration rather than the run itself.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CognitiveGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
