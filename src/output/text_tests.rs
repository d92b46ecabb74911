use super::*;

fn outcome(passed: bool, matched: usize, threshold: usize) -> CheckOutcome {
    CheckOutcome {
        passed,
        matched,
        threshold,
    }
}

fn sample_report(mandatory_pass: bool) -> ChecklistReport {
    let mut report = ChecklistReport::default();
    report
        .mandatory
        .insert("Load CSV files".to_string(), outcome(true, 2, 2));
    report.mandatory.insert(
        "Points system".to_string(),
        outcome(mandatory_pass, usize::from(mandatory_pass) * 2, 2),
    );
    report
        .optional
        .insert("Player name entry".to_string(), outcome(true, 1, 1));
    report
        .optional
        .insert("Custom question count".to_string(), outcome(false, 0, 1));
    report
        .bonus
        .insert("Display ranking".to_string(), outcome(false, 1, 2));
    report
}

#[test]
fn report_contains_section_headers() {
    let formatter = TextFormatter::new(ColorMode::Never);

    let output = formatter.format(&sample_report(true)).unwrap();

    assert!(output.contains("MANDATORY FEATURES"));
    assert!(output.contains("OPTIONAL FEATURES"));
    assert!(output.contains("BONUS FEATURES"));
    assert!(output.contains("FINAL REPORT"));
}

#[test]
fn passing_report_shows_passed_status() {
    let formatter = TextFormatter::new(ColorMode::Never);

    let output = formatter.format(&sample_report(true)).unwrap();

    assert!(output.contains("✓ ALL MANDATORY FEATURES PASSED (2/2)"));
    assert!(output.contains("✓ STATUS: PASSED"));
    assert!(!output.contains("missing"));
}

#[test]
fn failing_report_lists_missing_features() {
    let formatter = TextFormatter::new(ColorMode::Never);

    let output = formatter.format(&sample_report(false)).unwrap();

    assert!(output.contains("✗ MANDATORY FEATURES FAILED (1 missing)"));
    assert!(output.contains("✗ STATUS: FAILED"));
    assert!(output.contains("The following mandatory features are missing:"));
    assert!(output.contains("  • Points system"));
    assert!(!output.contains("  • Load CSV files"));
}

#[test]
fn mandatory_checks_use_pass_fail_markers() {
    let formatter = TextFormatter::new(ColorMode::Never);

    let output = formatter.format(&sample_report(false)).unwrap();

    assert!(output.contains("✓ PASS | Load CSV files"));
    assert!(output.contains("✗ FAIL | Points system"));
}

#[test]
fn non_gating_checks_use_done_markers() {
    let formatter = TextFormatter::new(ColorMode::Never);

    let output = formatter.format(&sample_report(true)).unwrap();

    assert!(output.contains("✓ DONE | Player name entry"));
    assert!(output.contains("✗ NOT DONE | Custom question count"));
}

#[test]
fn subtotals_count_passed_checks() {
    let formatter = TextFormatter::new(ColorMode::Never);

    let output = formatter.format(&sample_report(true)).unwrap();

    assert!(output.contains("Optional features: 1/2 implemented"));
    assert!(output.contains("Bonus features: 0/1 implemented"));
}

#[test]
fn never_mode_emits_no_ansi_codes() {
    let formatter = TextFormatter::new(ColorMode::Never);

    let output = formatter.format(&sample_report(false)).unwrap();

    assert!(!output.contains("\x1b["));
}

#[test]
fn always_mode_colors_markers() {
    let formatter = TextFormatter::new(ColorMode::Always);

    let output = formatter.format(&sample_report(false)).unwrap();

    assert!(output.contains("\x1b[32m"));
    assert!(output.contains("\x1b[31m"));
}

#[test]
fn verbose_appends_match_counts() {
    let formatter = TextFormatter::with_verbose(ColorMode::Never, true);

    let output = formatter.format(&sample_report(true)).unwrap();

    assert!(output.contains("✓ PASS | Load CSV files [matched 2/2]"));
    assert!(output.contains("✗ NOT DONE | Custom question count [matched 0/1]"));
}
