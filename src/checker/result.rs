use indexmap::IndexMap;
use serde::Serialize;

use super::checklist::Tier;

/// Outcome of a single check: how many alternative patterns matched,
/// against the check's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub passed: bool,
    pub matched: usize,
    pub threshold: usize,
}

/// Results of a full checklist run: one name-to-outcome map per tier,
/// in checklist order. Populated once during evaluation and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChecklistReport {
    pub mandatory: IndexMap<String, CheckOutcome>,
    pub optional: IndexMap<String, CheckOutcome>,
    pub bonus: IndexMap<String, CheckOutcome>,
}

impl ChecklistReport {
    pub(super) fn tier_mut(&mut self, tier: Tier) -> &mut IndexMap<String, CheckOutcome> {
        match tier {
            Tier::Mandatory => &mut self.mandatory,
            Tier::Optional => &mut self.optional,
            Tier::Bonus => &mut self.bonus,
        }
    }

    /// Overall verdict: true iff every mandatory check passed. This is
    /// the only way the verdict is ever computed; optional and bonus
    /// outcomes never contribute.
    #[must_use]
    pub fn verdict(&self) -> bool {
        self.mandatory.values().all(|outcome| outcome.passed)
    }

    /// Names of mandatory checks that did not pass, in report order.
    #[must_use]
    pub fn missing_mandatory(&self) -> Vec<&str> {
        self.mandatory
            .iter()
            .filter(|(_, outcome)| !outcome.passed)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
