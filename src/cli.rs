use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "feature-guard")]
#[command(author, version, about = "Check assignment submissions for required code features")]
#[command(long_about = "Scans a directory of source files and checks the combined contents \
    against a feature checklist by case-insensitive pattern matching.\n\n\
    Exit codes:\n  \
    0 - All mandatory checks passed\n  \
    1 - One or more mandatory checks failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// TOML checklist file replacing the built-in checklist
    #[arg(short, long)]
    pub checklist: Option<PathBuf>,

    /// File extensions to scan (comma-separated, e.g., py,pyw)
    #[arg(long, value_delimiter = ',', default_value = "py")]
    pub ext: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Show matched pattern counts per check
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the report; the exit code still reflects the verdict
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
