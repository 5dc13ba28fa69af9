//! Command implementations behind the CLI.

mod check;
mod scan;

pub use check::{run_check, run_check_impl};
pub use scan::{run_scan, run_scan_impl};

use std::path::Path;

use crate::checker::ScanReport;
use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::{CognitiveGuardError, EXIT_CONFIG_ERROR, Result};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from an explicit path, the default search order, or
/// built-in defaults when `no_config` is set.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub(crate) fn format_output(
    format: OutputFormat,
    report: &ScanReport,
    color_mode: ColorMode,
    verbose: u8,
    target_coverage: f64,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose)
            .with_target_coverage(target_coverage)
            .format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        std::fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Print a command failure and return the exit code for it.
pub(crate) fn report_error(err: &CognitiveGuardError, color: ColorChoice) -> i32 {
    let detail = std::error::Error::source(err).map(ToString::to_string);
    let suggestion = err
        .is_config_error()
        .then(|| format!("Check {LOCAL_CONFIG_NAME} or pass --no-config to use defaults"));

    let error_type = if err.is_config_error() {
        "Configuration Error"
    } else {
        "Error"
    };
    ErrorOutput::new(color_choice_to_mode(color)).print_error(
        error_type,
        &err.to_string(),
        detail.as_deref(),
        suggestion.as_deref(),
    );
    EXIT_CONFIG_ERROR
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
