//! Configuration for building the parser registry.
//!
//! Loaded from `generix.toml` in the working directory when present,
//! otherwise every field keeps its default.

use crate::parser::ParserDescriptor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE: &str = "generix.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerixConfig {
    /// Parser names to enable, in registration order. `None` enables all.
    pub parsers: Option<Vec<String>>,

    /// Log filter used by the CLI (e.g. "info", "generix=debug")
    pub log_level: Option<String>,
}

impl GenerixConfig {
    /// Load `./generix.toml`, or defaults if it does not exist
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(CONFIG_FILE).exists() {
            return Self::from_file(CONFIG_FILE);
        }
        Ok(Self::default())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply the `parsers` selection to a set of descriptors
    ///
    /// Keeps only the named descriptors, reordered to match the config.
    /// Names that match nothing are logged and ignored.
    pub fn select(&self, descriptors: Vec<ParserDescriptor>) -> Vec<ParserDescriptor> {
        let Some(names) = &self.parsers else {
            return descriptors;
        };

        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            match descriptors.iter().find(|d| d.name() == name) {
                Some(descriptor) => selected.push(descriptor.clone()),
                None => warn!(parser = %name, "Configured parser is not available"),
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::builtin_descriptors;

    fn names(descriptors: &[ParserDescriptor]) -> Vec<&str> {
        descriptors.iter().map(|d| d.name()).collect()
    }

    #[test]
    fn test_default_keeps_everything() {
        let config = GenerixConfig::default();
        let selected = config.select(builtin_descriptors());
        assert_eq!(names(&selected), vec!["json", "text"]);
    }

    #[test]
    fn test_select_reorders_and_filters() {
        let config = GenerixConfig::from_toml(r#"parsers = ["text", "missing", "json"]"#).unwrap();
        let selected = config.select(builtin_descriptors());
        assert_eq!(names(&selected), vec!["text", "json"]);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GenerixConfig::from_toml("").unwrap();
        assert_eq!(config, GenerixConfig::default());
    }

    #[test]
    fn test_log_level() {
        let config = GenerixConfig::from_toml(r#"log_level = "debug""#).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.parsers.is_none());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "parsers = [\"json\"]\n").unwrap();

        let config = GenerixConfig::from_file(&path).unwrap();
        assert_eq!(config.parsers, Some(vec!["json".to_string()]));
    }

    #[test]
    fn test_invalid_toml() {
        let result = GenerixConfig::from_toml("parsers = 3");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
