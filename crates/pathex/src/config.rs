// File: src/config.rs
// Purpose: Configuration parsing from pathex.toml

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::options::Options;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "pathex.toml";

/// File-level configuration
///
/// ```toml
/// [options]
/// delimiter = "/"
/// strict = true
/// ends_with = ["?", "#"]
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub options: Options,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./pathex.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.options.delimiter, '/');
        assert!(config.options.end);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::parse("   \n").unwrap();
        assert_eq!(config.options.delimiter, '/');
        assert!(!config.options.strict);
    }

    #[test]
    fn test_options_table() {
        let toml = r##"
            [options]
            strict = true
            start = false
            ends_with = ["#"]
        "##;
        let config = Config::parse(toml).unwrap();
        assert!(config.options.strict);
        assert!(!config.options.start);
        assert!(config.options.end);
        assert_eq!(config.options.ends_with, vec!["#"]);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(Config::parse("[options]\ndelimiter = 5").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/pathex.toml").unwrap();
        assert_eq!(config.options.delimiter, '/');
    }
}
