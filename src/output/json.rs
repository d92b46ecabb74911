use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::{CheckOutcome, ChecklistReport};
use crate::error::Result;

use super::ReportFormatter;

/// Serializable envelope adding the derived verdict to the report.
#[derive(Serialize)]
struct JsonReport<'a> {
    verdict: bool,
    mandatory: &'a IndexMap<String, CheckOutcome>,
    optional: &'a IndexMap<String, CheckOutcome>,
    bonus: &'a IndexMap<String, CheckOutcome>,
    missing_mandatory: Vec<&'a str>,
}

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ChecklistReport) -> Result<String> {
        let envelope = JsonReport {
            verdict: report.verdict(),
            mandatory: &report.mandatory,
            optional: &report.optional,
            bonus: &report.bonus,
            missing_mandatory: report.missing_mandatory(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
