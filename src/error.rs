use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiteSizedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to parse the regular expression {pattern}: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BiteSizedError {
    /// Short category name, stable across message changes.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_) => "Config",
            Self::InvalidGlob { .. } | Self::InvalidRegex { .. } => "Pattern",
            Self::FileRead { .. } => "FileRead",
            Self::InvariantViolation(_) => "Invariant",
            Self::Io(_) => "IO",
        }
    }
}

pub type Result<T> = std::result::Result<T, BiteSizedError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
