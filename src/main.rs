use clap::Parser;

use feature_guard::checker::{Checklist, ChecklistReport};
use feature_guard::cli::{Cli, ColorChoice};
use feature_guard::corpus::{SkippedFile, build_corpus};
use feature_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter,
};
use feature_guard::scanner::{DirectoryScanner, FileScanner, SourceFilter};
use feature_guard::{EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> feature_guard::Result<i32> {
    // 1. Load and compile the checklist (built-in unless overridden)
    let checklist = match &cli.checklist {
        Some(path) => feature_guard::config::load_checklist(path)?,
        None => Checklist::builtin()?,
    };

    // 2. Collect source files
    let filter = SourceFilter::new(cli.ext.clone(), &cli.exclude)?;
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan(&cli.path)?;

    // 3. Build the corpus; unreadable files become warnings
    let (corpus, skipped) = build_corpus(&files);
    warn_skipped(&skipped);

    // 4. Run every check
    let report = checklist.evaluate(&corpus);

    // 5. Render the report once, after all checks completed
    if !cli.quiet {
        let output = format_report(cli, &report)?;
        print!("{output}");
    }

    // 6. Verdict determines the exit code
    if report.verdict() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_CHECKS_FAILED)
    }
}

fn warn_skipped(skipped: &[SkippedFile]) {
    for skip in skipped {
        eprintln!(
            "Warning: could not read {}: {}",
            skip.path.display(),
            skip.reason
        );
    }
}

fn format_report(cli: &Cli, report: &ChecklistReport) -> feature_guard::Result<String> {
    match cli.format {
        OutputFormat::Text => {
            let color_mode = color_choice_to_mode(cli.color);
            TextFormatter::with_verbose(color_mode, cli.verbose).format(report)
        }
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
