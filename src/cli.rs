use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "cognitive-guard")]
#[command(
    author,
    version,
    about = "Block complex, undocumented functions from being committed"
)]
#[command(long_about = "Scores functions by cognitive complexity and flags those \
    above the threshold that lack documentation.\n\n\
    Exit codes:\n  \
    0 - No violations\n  \
    1 - Violations found (or coverage below --fail-under)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress report output on stdout
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fail when complex functions lack documentation
    Check(CheckArgs),

    /// Report documentation coverage for the whole codebase
    Scan(ScanArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Directory to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only check files staged for commit
    #[arg(long)]
    pub staged: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Complexity threshold (overrides config, 1-20)
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail when documentation coverage is below this ratio (0.0-1.0)
    #[arg(long, value_parser = parse_ratio)]
    pub fail_under: Option<f64>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not between 0.0 and 1.0"))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
