use regex::Regex;
use serde::{Deserialize, Serialize};

use super::result::{CheckOutcome, ChecklistReport};
use crate::corpus::{Corpus, compile_pattern};
use crate::error::{FeatureGuardError, Result};

/// Tier a check belongs to. Only the mandatory tier gates the verdict;
/// optional and bonus checks are reported but never affect the exit
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Mandatory,
    Optional,
    Bonus,
}

/// One named check, as data: a set of alternative patterns and the
/// minimum number of them that must match the corpus for the check to
/// pass.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckSpec {
    pub name: String,
    pub tier: Tier,
    pub threshold: usize,
    pub patterns: Vec<String>,
}

fn check(name: &str, tier: Tier, threshold: usize, patterns: &[&str]) -> CheckSpec {
    CheckSpec {
        name: name.to_string(),
        tier,
        threshold,
        patterns: patterns.iter().map(ToString::to_string).collect(),
    }
}

fn mandatory_checks() -> Vec<CheckSpec> {
    vec![
        check(
            "Load CSV files",
            Tier::Mandatory,
            2,
            &[
                r"read_csv|pd\.read_csv|open.*csv|csv\.reader",
                r"pokedex|pokemon.*csv",
                r"medicine|medicin.*csv|remedi.*csv",
            ],
        ),
        check(
            "Store data in lists",
            Tier::Mandatory,
            3,
            &[
                r"pokemons?\s*=\s*\[",
                r"pokemon.*list|pokemon.*\[\]",
                r"medicines?\s*=\s*\[",
                r"medicine.*list|medicine.*\[\]",
                r"\.append\(",
                r"\.tolist\(",
            ],
        ),
        check(
            "Game state variables",
            Tier::Mandatory,
            3,
            &[
                r"score\s*=",
                r"point",
                r"question.*=\s*[0-9]|num.*question|num.*asked",
                r"round",
                r"player.*name|player.*score",
            ],
        ),
        check(
            "Randomize function",
            Tier::Mandatory,
            2,
            &[
                r"def\s+random\w*\(",
                r"random\.choice",
                r"random\.sample",
                r"random\.randint",
                r"choice.*pokemon|choice.*medicine",
            ],
        ),
        check(
            "Game dialogue/interaction",
            Tier::Mandatory,
            4,
            &[
                r"input\s*\(",
                r"print\s*\(",
                r"question|guess|answer",
                r"correct|wrong|invalid",
            ],
        ),
        check(
            "Points system",
            Tier::Mandatory,
            2,
            &[
                r"score\s*\+=|score\s*=\s*score\s*\+",
                r"point.*\+=|point.*=.*point.*\+",
                r"accumulate|gain.*point",
                r"correct.*point|point.*correct",
            ],
        ),
        check(
            "Round system",
            Tier::Mandatory,
            2,
            &[
                r"for.*in.*range|while.*<|while.*>",
                r"round|iteration|question.*\d+",
                r"reset.*score|score.*=\s*0",
            ],
        ),
        check(
            "Display final score",
            Tier::Mandatory,
            1,
            &[
                r"print.*score|display.*score|show.*score",
                r"print.*point|final.*score",
                r"print.*player.*score",
            ],
        ),
    ]
}

fn optional_checks() -> Vec<CheckSpec> {
    vec![
        check(
            "Custom question count",
            Tier::Optional,
            1,
            &[
                r"input.*question|input.*round|how.*many.*question",
                r"custom.*question|choose.*question|set.*question",
            ],
        ),
        check(
            "Player name entry",
            Tier::Optional,
            1,
            &[
                r"input.*name|enter.*name|player.*name",
                r"player.*=.*input|name.*=.*input",
            ],
        ),
        check(
            "Portuguese/English support",
            Tier::Optional,
            2,
            &[
                r"pt|português|portuguese",
                r"en|english|inglês",
                r"language|idioma|lang.*choice|select.*language",
            ],
        ),
    ]
}

fn bonus_checks() -> Vec<CheckSpec> {
    vec![
        check(
            "Save scores to file",
            Tier::Bonus,
            2,
            &[
                r"write|save.*score|export",
                r"csv|json|database|file.*write",
                r"scores\.csv|ranking|leaderboard",
            ],
        ),
        check(
            "Display ranking",
            Tier::Bonus,
            2,
            &[
                r"ranking|leaderboard|top.*player|best.*player",
                r"sort.*score|display.*ranking|show.*ranking",
                r"ranking.*menu|view.*ranking",
            ],
        ),
        check(
            "Pokemon information viewer",
            Tier::Bonus,
            1,
            &[
                r"pokemon.*info|pokemon.*detail|pokemon.*search",
                r"search.*pokemon|display.*pokemon|show.*pokemon",
                r"pokemon.*menu|pokemon.*information",
            ],
        ),
        check(
            "Medicine information viewer",
            Tier::Bonus,
            1,
            &[
                r"medicine.*info|medicine.*detail|medicine.*search|remedi.*search",
                r"search.*medicine|display.*medicine|show.*medicine|remedi",
                r"medicine.*menu|medicine.*information",
            ],
        ),
    ]
}

/// The built-in checklist for the quiz-game assignment, in report
/// order: mandatory, then optional, then bonus.
#[must_use]
pub fn builtin_checks() -> Vec<CheckSpec> {
    let mut checks = mandatory_checks();
    checks.extend(optional_checks());
    checks.extend(bonus_checks());
    checks
}

/// A check whose patterns have been compiled.
pub struct CompiledCheck {
    pub name: String,
    pub tier: Tier,
    pub threshold: usize,
    pub patterns: Vec<Regex>,
}

impl CompiledCheck {
    /// Evaluate this check against the corpus: count how many of the
    /// alternative patterns match anywhere, and pass when the count
    /// reaches the threshold. Which alternatives matched is irrelevant.
    #[must_use]
    pub fn evaluate(&self, corpus: &Corpus) -> CheckOutcome {
        let matched = self.patterns.iter().filter(|p| corpus.matches(p)).count();
        CheckOutcome {
            passed: matched >= self.threshold,
            matched,
            threshold: self.threshold,
        }
    }
}

/// A validated, compiled checklist.
pub struct Checklist {
    checks: Vec<CompiledCheck>,
}

impl Checklist {
    /// Validate and compile a list of check specs.
    ///
    /// Checks are compiled in the given order, which becomes the
    /// report order within each tier.
    ///
    /// # Errors
    /// Returns an error if a check has an empty name, no patterns, a
    /// threshold outside `1..=patterns.len()`, or a malformed pattern.
    pub fn compile(specs: &[CheckSpec]) -> Result<Self> {
        let mut checks = Vec::with_capacity(specs.len());
        for spec in specs {
            validate_spec(spec)?;
            let patterns = spec
                .patterns
                .iter()
                .map(|p| compile_pattern(p))
                .collect::<Result<Vec<_>>>()?;
            checks.push(CompiledCheck {
                name: spec.name.clone(),
                tier: spec.tier,
                threshold: spec.threshold,
                patterns,
            });
        }
        Ok(Self { checks })
    }

    /// Compile the built-in checklist.
    ///
    /// # Errors
    /// Returns an error only if a built-in pattern is malformed, which
    /// unit tests rule out.
    pub fn builtin() -> Result<Self> {
        Self::compile(&builtin_checks())
    }

    #[must_use]
    pub fn checks(&self) -> &[CompiledCheck] {
        &self.checks
    }

    /// Run every check against the corpus and group the outcomes by
    /// tier, preserving checklist order.
    ///
    /// Checks are independent: no result feeds into another, so the
    /// report is a pure function of the corpus text.
    #[must_use]
    pub fn evaluate(&self, corpus: &Corpus) -> ChecklistReport {
        let mut report = ChecklistReport::default();
        for check in &self.checks {
            let outcome = check.evaluate(corpus);
            report.tier_mut(check.tier).insert(check.name.clone(), outcome);
        }
        report
    }
}

fn validate_spec(spec: &CheckSpec) -> Result<()> {
    if spec.name.trim().is_empty() {
        return Err(FeatureGuardError::Config(
            "check name cannot be empty".to_string(),
        ));
    }
    if spec.patterns.is_empty() {
        return Err(FeatureGuardError::Config(format!(
            "check '{}' has no patterns",
            spec.name
        )));
    }
    if spec.threshold == 0 || spec.threshold > spec.patterns.len() {
        return Err(FeatureGuardError::Config(format!(
            "check '{}': threshold must be between 1 and {} (got {})",
            spec.name,
            spec.patterns.len(),
            spec.threshold
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "checklist_tests.rs"]
mod tests;
