use std::collections::BTreeSet;
use std::io::Write;

use crate::analyzer::Severity;
use crate::checker::ScanReport;
use crate::config::DEFAULT_TARGET_COVERAGE;
use crate::error::Result;

use super::{OutputFormatter, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

const HEADERS: [&str; 5] = ["File", "Function", "Line", "Score", "Severity"];

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    target_coverage: f64,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
            target_coverage: DEFAULT_TARGET_COVERAGE,
        }
    }

    /// Coverage at or above this ratio is shown as healthy.
    #[must_use]
    pub const fn with_target_coverage(mut self, target: f64) -> Self {
        self.target_coverage = target;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize_with_color(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_summary(&self, report: &ScanReport, output: &mut Vec<u8>) {
        let coverage = report.coverage();
        let coverage_color = if coverage >= self.target_coverage {
            ansi::GREEN
        } else {
            ansi::YELLOW
        };
        let violations = report.total_violations();
        let violations_color = if violations > 0 {
            ansi::RED
        } else {
            ansi::GREEN
        };

        writeln!(output, "{}", self.colorize_with_color("Scan Results", ansi::BOLD)).ok();
        writeln!(output).ok();
        writeln!(output, "Files analyzed: {}", report.total_files()).ok();
        writeln!(output, "Total functions: {}", report.total_functions()).ok();
        writeln!(
            output,
            "Documentation coverage: {}",
            self.colorize_with_color(&format!("{:.1}%", coverage * 100.0), coverage_color)
        )
        .ok();
        writeln!(
            output,
            "Violations: {}",
            self.colorize_with_color(&violations.to_string(), violations_color)
        )
        .ok();
    }

    fn format_files(&self, report: &ScanReport, output: &mut Vec<u8>) {
        writeln!(output).ok();
        for file in report.files() {
            writeln!(
                output,
                "  {}: {} functions, {} documented ({:.1}%)",
                self.colorize_with_color(file.path(), ansi::CYAN),
                file.total_functions(),
                file.documented_functions(),
                file.coverage() * 100.0
            )
            .ok();
        }
    }

    fn format_violations(&self, report: &ScanReport, output: &mut Vec<u8>) {
        let rows: Vec<[String; 5]> = report
            .violations()
            .map(|(file, v)| {
                let severity = v.severity();
                [
                    file.path().to_string(),
                    v.name.clone(),
                    v.start_line.to_string(),
                    v.complexity.to_string(),
                    format!("{} {severity}", severity.symbol()),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(output).ok();
        writeln!(
            output,
            "{}",
            self.colorize_with_color("Documentation violations:", ansi::RED)
        )
        .ok();
        let header = format!(
            "  {:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}  {}",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            HEADERS[3],
            HEADERS[4],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
        writeln!(output, "{}", self.colorize_with_color(&header, ansi::DIM)).ok();
        for row in &rows {
            writeln!(
                output,
                "  {}  {}  {:>w2$}  {:>w3$}  {}",
                self.colorize_with_color(&format!("{:<w$}", row[0], w = widths[0]), ansi::CYAN),
                self.colorize_with_color(&format!("{:<w$}", row[1], w = widths[1]), ansi::YELLOW),
                row[2],
                row[3],
                row[4],
                w2 = widths[2],
                w3 = widths[3],
            )
            .ok();
        }

        if self.verbose >= 1 {
            let severities: BTreeSet<Severity> =
                report.violations().map(|(_, v)| v.severity()).collect();
            writeln!(output).ok();
            for severity in severities {
                writeln!(output, "  {} {}", severity.symbol(), severity.description()).ok();
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = Vec::new();

        if report.total_files() == 0 {
            writeln!(
                output,
                "{}",
                self.colorize_with_color("No files analyzed", ansi::YELLOW)
            )
            .ok();
            return Ok(String::from_utf8_lossy(&output).to_string());
        }

        self.format_summary(report, &mut output);

        if self.verbose >= 1 {
            self.format_files(report, &mut output);
        }

        if report.has_violations() {
            self.format_violations(report, &mut output);
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
