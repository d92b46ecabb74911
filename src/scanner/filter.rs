use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{FeatureGuardError, Result};

/// Directory names never descended into, regardless of user excludes.
pub const SKIP_DIRS: &[&str] = &[
    "__pycache__",
    ".git",
    "venv",
    "env",
    ".venv",
    "node_modules",
    "target",
];

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

pub struct SourceFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl SourceFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// An empty extension list includes every file.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| FeatureGuardError::InvalidGlob {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| FeatureGuardError::InvalidGlob {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for SourceFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_source_extension(path) && !self.is_excluded(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| !SKIP_DIRS.contains(&name))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
