use super::*;
use crate::checker::{Checker, ComplexityResult, ThresholdChecker};

fn report_with_violation() -> ScanReport {
    ScanReport::new(vec![ThresholdChecker::new(5).check(
        "src/mixed.py".to_string(),
        vec![
            ComplexityResult::new("simple_func", 2, 0, true),
            ComplexityResult::new("complex_func", 6, 6, false),
        ],
    )])
}

fn clean_report() -> ScanReport {
    ScanReport::new(vec![ThresholdChecker::new(5).check(
        "lib.py".to_string(),
        vec![ComplexityResult::new("tidy", 1, 2, true)],
    )])
}

#[test]
fn empty_report_says_no_files() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&ScanReport::default())
        .unwrap();
    assert_eq!(output, "No files analyzed\n");
}

#[test]
fn summary_lists_totals_and_coverage() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&report_with_violation())
        .unwrap();

    assert!(output.contains("Files analyzed: 1"));
    assert!(output.contains("Total functions: 2"));
    assert!(output.contains("Documentation coverage: 50.0%"));
    assert!(output.contains("Violations: 1"));
}

#[test]
fn violation_table_lists_each_violation() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&report_with_violation())
        .unwrap();

    assert!(output.contains("Documentation violations:"));
    assert!(output.contains("File"));
    let row = output
        .lines()
        .find(|line| line.contains("complex_func"))
        .unwrap();
    assert!(row.contains("src/mixed.py"));
    assert!(row.contains("🟡 moderate"));
    assert!(!output.contains("simple_func"));
}

#[test]
fn clean_report_has_no_violation_table() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&clean_report())
        .unwrap();

    assert!(output.contains("Violations: 0"));
    assert!(!output.contains("Documentation violations:"));
}

#[test]
fn verbose_lists_per_file_coverage() {
    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&report_with_violation())
        .unwrap();
    assert!(output.contains("src/mixed.py: 2 functions, 1 documented (50.0%)"));
    assert!(output.contains("🟡 Moderate - Reasonably clear"));
}

#[test]
fn severity_legend_only_when_verbose() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&report_with_violation())
        .unwrap();
    assert!(!output.contains("Reasonably clear"));
}

#[test]
fn no_colors_means_no_escape_codes() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&report_with_violation())
        .unwrap();
    assert!(!output.contains("\x1b["));
}

#[test]
fn coverage_color_follows_target() {
    let below = TextFormatter::new(ColorMode::Always)
        .with_target_coverage(0.9)
        .format(&report_with_violation())
        .unwrap();
    assert!(below.contains(&format!("{}50.0%", ansi::YELLOW)));

    let above = TextFormatter::new(ColorMode::Always)
        .with_target_coverage(0.4)
        .format(&report_with_violation())
        .unwrap();
    assert!(above.contains(&format!("{}50.0%", ansi::GREEN)));
}
