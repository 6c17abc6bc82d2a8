//! Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,
}

/// How a generated sequence is printed
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// A sentence followed by the bracketed sequence
    #[default]
    Text,
    /// One term per line
    List,
    /// A JSON object with the count and the terms as strings
    Json,
}

/// Default settings
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Number of terms when `generate` is run without a count
    #[serde(default = "default_count")]
    pub count: i64,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            count: default_count(),
            format: OutputFormat::default(),
        }
    }
}

fn default_count() -> i64 {
    10
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}
