use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid regex pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid exclude glob: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeatureGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
