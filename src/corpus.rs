use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};

use crate::error::{FeatureGuardError, Result};

/// Compile a pattern for corpus matching.
///
/// Every pattern in the crate goes through here, so all matching is
/// uniformly case-insensitive.
///
/// # Errors
/// Returns an error if the pattern is not a valid regex.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| FeatureGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })
}

/// A file that could not be read while building the corpus.
///
/// Skips are collected rather than raised; the caller derives warnings
/// from them and the run continues.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: std::io::Error,
}

/// The concatenated text of every scanned file, treated as one search
/// target. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    text: String,
    file_count: usize,
}

impl Corpus {
    /// Build a corpus from raw text. Used for synthetic corpora in tests.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            text,
            file_count: 0,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Does the pattern match anywhere in the corpus?
    ///
    /// This is the sole matching primitive: existence only, no
    /// position or count.
    #[must_use]
    pub fn matches(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.text)
    }

    /// Compile an ad-hoc pattern and match it against the corpus.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regex.
    pub fn matches_pattern(&self, pattern: &str) -> Result<bool> {
        Ok(self.matches(&compile_pattern(pattern)?))
    }

    /// Is a function with this name defined anywhere in the corpus?
    ///
    /// # Errors
    /// Returns an error if the derived pattern fails to compile.
    pub fn has_function_def(&self, name: &str) -> Result<bool> {
        self.matches_pattern(&format!(r"def\s+{}\s*\(", regex::escape(name)))
    }

    /// Is a class with this name defined anywhere in the corpus?
    ///
    /// # Errors
    /// Returns an error if the derived pattern fails to compile.
    pub fn has_class_def(&self, name: &str) -> Result<bool> {
        self.matches_pattern(&format!(r"class\s+{}\s*[:\(]", regex::escape(name)))
    }

    /// Is this name assigned anywhere in the corpus?
    ///
    /// # Errors
    /// Returns an error if the derived pattern fails to compile.
    pub fn has_assignment(&self, name: &str) -> Result<bool> {
        self.matches_pattern(&format!(r"{}\s*=", regex::escape(name)))
    }
}

/// Read every file and concatenate the contents into one corpus, each
/// file preceded by a `# FILE:` marker line.
///
/// Files are decoded tolerantly (invalid UTF-8 sequences become
/// replacement characters). Read failures do not abort the build; the
/// offending files are returned as skip records.
#[must_use]
pub fn build_corpus(files: &[PathBuf]) -> (Corpus, Vec<SkippedFile>) {
    let mut text = String::new();
    let mut file_count = 0;
    let mut skipped = Vec::new();

    for path in files {
        match read_lossy(path) {
            Ok(contents) => {
                let _ = write!(text, "\n\n# FILE: {}\n", path.display());
                text.push_str(&contents);
                file_count += 1;
            }
            Err(reason) => skipped.push(SkippedFile {
                path: path.clone(),
                reason,
            }),
        }
    }

    (Corpus { text, file_count }, skipped)
}

fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
