use super::*;

fn outcome(passed: bool) -> CheckOutcome {
    CheckOutcome {
        passed,
        matched: usize::from(passed),
        threshold: 1,
    }
}

#[test]
fn verdict_is_conjunction_of_mandatory_outcomes() {
    let mut report = ChecklistReport::default();
    report.mandatory.insert("a".to_string(), outcome(true));
    report.mandatory.insert("b".to_string(), outcome(true));
    assert!(report.verdict());

    report.mandatory.insert("c".to_string(), outcome(false));
    assert!(!report.verdict());
}

#[test]
fn optional_and_bonus_never_affect_verdict() {
    let mut report = ChecklistReport::default();
    report.mandatory.insert("a".to_string(), outcome(true));
    report.optional.insert("o".to_string(), outcome(false));
    report.bonus.insert("b".to_string(), outcome(false));

    assert!(report.verdict());
}

#[test]
fn empty_mandatory_tier_passes_vacuously() {
    let report = ChecklistReport::default();
    assert!(report.verdict());
}

#[test]
fn missing_mandatory_preserves_insertion_order() {
    let mut report = ChecklistReport::default();
    report.mandatory.insert("first".to_string(), outcome(false));
    report.mandatory.insert("second".to_string(), outcome(true));
    report.mandatory.insert("third".to_string(), outcome(false));

    assert_eq!(report.missing_mandatory(), ["first", "third"]);
}

#[test]
fn missing_mandatory_is_empty_when_all_pass() {
    let mut report = ChecklistReport::default();
    report.mandatory.insert("a".to_string(), outcome(true));

    assert!(report.missing_mandatory().is_empty());
}

#[test]
fn tier_mut_routes_to_the_matching_group() {
    let mut report = ChecklistReport::default();
    report.tier_mut(Tier::Mandatory).insert("m".to_string(), outcome(true));
    report.tier_mut(Tier::Optional).insert("o".to_string(), outcome(true));
    report.tier_mut(Tier::Bonus).insert("b".to_string(), outcome(true));

    assert!(report.mandatory.contains_key("m"));
    assert!(report.optional.contains_key("o"));
    assert!(report.bonus.contains_key("b"));
}
