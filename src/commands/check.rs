use crate::cli::{CheckArgs, Cli};
use crate::config::validate_config_semantics;
use crate::pipeline::ScanPipeline;
use crate::{EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED, Result};

use super::{color_choice_to_mode, format_output, load_config, report_error, write_output};

/// Run `check`, returning the process exit code.
#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_error(&e, cli.color),
    }
}

/// # Errors
/// Returns an error on invalid configuration, an unreadable scan root, or
/// output that cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    if let Some(threshold) = args.threshold {
        config.complexity_threshold = threshold;
        validate_config_semantics(&config)?;
    }

    let pipeline = ScanPipeline::new(&config)?;
    let report = if args.staged {
        pipeline.scan_staged(&args.path)
    } else {
        pipeline.scan_all(&args.path)?
    };
    tracing::debug!(
        "check: {} files, {} functions, {} violations",
        report.total_files(),
        report.total_functions(),
        report.total_violations()
    );

    let output = format_output(
        args.format,
        &report,
        color_choice_to_mode(cli.color),
        cli.verbose,
        config.target_coverage,
    )?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(if report.has_violations() {
        EXIT_THRESHOLD_EXCEEDED
    } else {
        EXIT_SUCCESS
    })
}
