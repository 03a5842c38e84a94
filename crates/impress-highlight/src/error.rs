//! Error types for impress-highlight

use thiserror::Error;

/// Result type alias for highlight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Main error type for highlight operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// The term alternation could not be compiled
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Configuration-related errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Value outside its allowed range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Malformed TOML or JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(String),
}

impl From<regex::Error> for HighlightError {
    fn from(e: regex::Error) -> Self {
        HighlightError::Pattern(e.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

#[cfg(feature = "toml-config")]
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
