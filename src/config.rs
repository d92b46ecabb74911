use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::checker::{CheckSpec, Checklist};
use crate::error::{FeatureGuardError, Result};

/// On-disk checklist format: a flat list of `[[check]]` tables.
///
/// ```toml
/// [[check]]
/// name = "Load CSV files"
/// tier = "mandatory"
/// threshold = 2
/// patterns = ["read_csv", "pokedex"]
/// ```
#[derive(Debug, Deserialize)]
pub struct ChecklistFile {
    #[serde(default, rename = "check")]
    pub checks: Vec<CheckSpec>,
}

/// Load and compile a checklist from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, contains no
/// checks, or any check fails validation (empty name, no patterns,
/// threshold out of range, malformed regex).
pub fn load_checklist(path: &Path) -> Result<Checklist> {
    let content = fs::read_to_string(path)?;
    let file: ChecklistFile = toml::from_str(&content)?;

    if file.checks.is_empty() {
        return Err(FeatureGuardError::Config(format!(
            "checklist file contains no checks: {}",
            path.display()
        )));
    }

    Checklist::compile(&file.checks)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
