use super::*;

fn outcome(passed: bool) -> CheckOutcome {
    CheckOutcome {
        passed,
        matched: usize::from(passed),
        threshold: 1,
    }
}

fn sample_report() -> ChecklistReport {
    let mut report = ChecklistReport::default();
    report.mandatory.insert("First".to_string(), outcome(true));
    report.mandatory.insert("Second".to_string(), outcome(false));
    report.bonus.insert("Extra".to_string(), outcome(true));
    report
}

#[test]
fn emits_valid_json_with_verdict() {
    let output = JsonFormatter.format(&sample_report()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["verdict"], serde_json::Value::Bool(false));
    assert_eq!(value["mandatory"]["First"]["passed"], true);
    assert_eq!(value["mandatory"]["Second"]["matched"], 0);
    assert_eq!(value["mandatory"]["Second"]["threshold"], 1);
    assert_eq!(value["bonus"]["Extra"]["passed"], true);
}

#[test]
fn lists_missing_mandatory_names() {
    let output = JsonFormatter.format(&sample_report()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let missing = value["missing_mandatory"].as_array().unwrap();

    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0], "Second");
}

#[test]
fn preserves_check_order_in_output() {
    let output = JsonFormatter.format(&sample_report()).unwrap();

    let first = output.find("\"First\"").unwrap();
    let second = output.find("\"Second\"").unwrap();

    assert!(first < second);
}

#[test]
fn passing_report_serializes_true_verdict() {
    let mut report = ChecklistReport::default();
    report.mandatory.insert("Only".to_string(), outcome(true));

    let output = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["verdict"], serde_json::Value::Bool(true));
    assert!(value["missing_mandatory"].as_array().unwrap().is_empty());
}
