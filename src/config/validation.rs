//! Configuration semantic validation.
//!
//! Range checks and glob syntax checks run after parsing.

use crate::config::Config;
use crate::config::model::{MAX_COMPLEXITY_THRESHOLD, MIN_COMPLEXITY_THRESHOLD};
use crate::{CognitiveGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `complexity_threshold` or `target_coverage` is out of
/// range, or an `ignore` pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_ranges(config)?;
    validate_glob_patterns(config)?;
    Ok(())
}

fn validate_ranges(config: &Config) -> Result<()> {
    if !(MIN_COMPLEXITY_THRESHOLD..=MAX_COMPLEXITY_THRESHOLD)
        .contains(&config.complexity_threshold)
    {
        return Err(CognitiveGuardError::Config(format!(
            "complexity_threshold must be between {MIN_COMPLEXITY_THRESHOLD} and {MAX_COMPLEXITY_THRESHOLD}, got {}",
            config.complexity_threshold
        )));
    }

    if !(0.0..=1.0).contains(&config.target_coverage) {
        return Err(CognitiveGuardError::Config(format!(
            "target_coverage must be between 0.0 and 1.0, got {}",
            config.target_coverage
        )));
    }
    Ok(())
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.ignore {
        globset::Glob::new(pattern).map_err(|e| CognitiveGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
