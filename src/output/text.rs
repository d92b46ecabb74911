use std::fmt::Write;

use indexmap::IndexMap;

use crate::checker::{CheckOutcome, ChecklistReport};
use crate::error::Result;

use super::ReportFormatter;

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

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

const RULE_WIDTH: usize = 70;

pub struct TextFormatter {
    use_colors: bool,
    verbose: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, false)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: bool) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
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

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_check_line(&self, output: &mut String, name: &str, outcome: &CheckOutcome, gating: bool) {
        let (marker, color) = match (gating, outcome.passed) {
            (true, true) => ("✓ PASS", ansi::GREEN),
            (true, false) => ("✗ FAIL", ansi::RED),
            (false, true) => ("✓ DONE", ansi::GREEN),
            (false, false) => ("✗ NOT DONE", ansi::YELLOW),
        };
        let marker = self.paint(marker, color);
        if self.verbose {
            let _ = writeln!(
                output,
                "  {marker} | {name} [matched {}/{}]",
                outcome.matched, outcome.threshold
            );
        } else {
            let _ = writeln!(output, "  {marker} | {name}");
        }
    }

    fn write_mandatory(&self, output: &mut String, tier: &IndexMap<String, CheckOutcome>) {
        let _ = writeln!(output, "MANDATORY FEATURES:");
        let _ = writeln!(output, "{}", "-".repeat(RULE_WIDTH));
        for (name, outcome) in tier {
            self.write_check_line(output, name, outcome, true);
        }
        let _ = writeln!(output, "{}", "-".repeat(RULE_WIDTH));

        let passed = tier.values().filter(|o| o.passed).count();
        let total = tier.len();
        if passed == total {
            let line = format!("✓ ALL MANDATORY FEATURES PASSED ({passed}/{total})");
            let _ = writeln!(output, "{}", self.paint(&line, ansi::GREEN));
        } else {
            let line = format!("✗ MANDATORY FEATURES FAILED ({} missing)", total - passed);
            let _ = writeln!(output, "{}", self.paint(&line, ansi::RED));
        }
    }

    fn write_non_gating(
        &self,
        output: &mut String,
        title: &str,
        label: &str,
        tier: &IndexMap<String, CheckOutcome>,
    ) {
        let _ = writeln!(output, "{title}:");
        let _ = writeln!(output, "{}", "-".repeat(RULE_WIDTH));
        for (name, outcome) in tier {
            self.write_check_line(output, name, outcome, false);
        }

        let passed = tier.values().filter(|o| o.passed).count();
        let _ = writeln!(output, "\n{label}: {passed}/{} implemented", tier.len());
    }

    fn write_final(&self, output: &mut String, report: &ChecklistReport) {
        write_banner(output, "FINAL REPORT");

        if report.verdict() {
            let _ = writeln!(output, "{}", self.paint("✓ STATUS: PASSED", ansi::GREEN));
        } else {
            let _ = writeln!(output, "{}", self.paint("✗ STATUS: FAILED", ansi::RED));
            let _ = writeln!(output, "\nThe following mandatory features are missing:");
            for name in report.missing_mandatory() {
                let _ = writeln!(output, "  • {name}");
            }
        }
    }
}

fn write_banner(output: &mut String, title: &str) {
    let _ = writeln!(output, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(output, "{title:^width$}", width = RULE_WIDTH);
    let _ = writeln!(output, "{}", "=".repeat(RULE_WIDTH));
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ChecklistReport) -> Result<String> {
        let mut output = String::new();

        write_banner(&mut output, "FEATURE VALIDATION REPORT");
        output.push('\n');

        self.write_mandatory(&mut output, &report.mandatory);
        output.push('\n');

        self.write_non_gating(
            &mut output,
            "OPTIONAL FEATURES",
            "Optional features",
            &report.optional,
        );
        output.push('\n');

        self.write_non_gating(&mut output, "BONUS FEATURES", "Bonus features", &report.bonus);
        output.push('\n');

        self.write_final(&mut output, report);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
