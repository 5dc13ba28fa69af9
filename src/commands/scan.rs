use crate::cli::{Cli, ScanArgs};
use crate::pipeline::ScanPipeline;
use crate::{EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED, Result};

use super::{color_choice_to_mode, format_output, load_config, report_error, write_output};

/// Run `scan`, returning the process exit code.
#[must_use]
pub fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_error(&e, cli.color),
    }
}

/// Full scan reporting coverage; fails only when `--fail-under` is missed.
///
/// # Errors
/// Returns an error on invalid configuration, an unreadable scan root, or
/// output that cannot be written.
pub fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let report = ScanPipeline::new(&config)?.scan_all(&args.path)?;

    let output = format_output(
        args.format,
        &report,
        color_choice_to_mode(cli.color),
        cli.verbose,
        config.target_coverage,
    )?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    let coverage = report.coverage();
    if let Some(minimum) = args.fail_under
        && coverage < minimum
    {
        if !cli.quiet {
            eprintln!(
                "Coverage {:.1}% is below --fail-under {:.1}%",
                coverage * 100.0,
                minimum * 100.0
            );
        }
        return Ok(EXIT_THRESHOLD_EXCEEDED);
    }
    Ok(EXIT_SUCCESS)
}
