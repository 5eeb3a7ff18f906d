//! Validator configuration.
//!
//! The configuration never changes a verdict; it only controls how much work
//! the validator does after the first mismatch.
//!
//! # Example YAML
//!
//! ```yaml
//! exhaustive: true
//! ```

use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for a [`Validator`](crate::Validator).
///
/// Missing keys take their default values, so an empty document is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use value_schema_core::ValidationConfig;
///
/// let config = ValidationConfig::from_yaml_str("exhaustive: true").unwrap();
/// assert!(config.exhaustive);
/// assert!(!ValidationConfig::default().exhaustive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Keep checking array elements and object fields after a mismatch so
    /// every mismatch is traced. When `false` the walk stops at the first
    /// failing element or field.
    pub exhaustive: bool,
}

impl ValidationConfig {
    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Yaml`](crate::Error::Yaml) if parsing fails.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }

    /// Loads configuration from a YAML file.
    ///
    /// An empty file reads the same as an empty string: the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::Error::Io) if the file cannot be read, or
    /// [`Yaml`](crate::Error::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::Error::Io) if the file cannot be written, or
    /// [`Yaml`](crate::Error::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}
