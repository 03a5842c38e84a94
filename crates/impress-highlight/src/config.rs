//! Configuration for impress-highlight
//!
//! Cropping budget and marker strings used by the highlighter. The defaults
//! match what the result list has always shown: 425 characters at most, a
//! 150 character lead-in and 20 characters of context on either side of a
//! match.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Highlighter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Upper bound on cropped text, in characters
    pub max_length: usize,
    /// Leading characters kept when no term is visible in the first window
    pub default_crop_length: usize,
    /// Characters of context kept around each matched term
    pub context_padding: usize,
    /// Marker appended where text was cut
    pub ellipsis: String,
    /// Replacement for sanitized or empty terms; never occurs in real text
    pub sentinel: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            max_length: 425,
            default_crop_length: 150,
            context_padding: 20,
            ellipsis: "...".to_string(),
            sentinel: "highlightNotDefined".to_string(),
        }
    }
}

impl HighlightConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate a TOML configuration file
    #[cfg(feature = "toml-config")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded highlight config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_length == 0 {
            return Err(ConfigError::OutOfRange(
                "max_length must be positive".to_string(),
            ));
        }

        if self.default_crop_length > self.max_length {
            return Err(ConfigError::OutOfRange(
                "default_crop_length must not exceed max_length".to_string(),
            ));
        }

        // Sanitization and escaping must leave the sentinel untouched
        if self.sentinel.is_empty() || !self.sentinel.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::OutOfRange(
                "sentinel must be a non-empty run of ASCII letters".to_string(),
            ));
        }

        Ok(())
    }
}
