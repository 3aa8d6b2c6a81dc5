//! `hashlab.toml` handling.
//!
//! ```toml
//! [chaining]
//! keys = 15
//! key_range = 100
//! table_size = 10
//! constant = 0.6180339887
//!
//! [probing]
//! keys = 1000
//! key_range = 1000
//! table_size = 1550
//! constant = 0.6180339887
//!
//! [compare]
//! trials = 1000
//! constant_b = 0.83
//! ```

use crate::experiment::ExperimentConfig;
use crate::hash::KNUTH;
use crate::Key;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parameters for filling a single table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub keys: usize,
    pub key_range: Key,
    pub table_size: usize,
    pub constant: f64,
}

/// A table section as written in the file; absent fields keep the section's defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TableSection {
    keys: Option<usize>,
    key_range: Option<Key>,
    table_size: Option<usize>,
    constant: Option<f64>,
}

impl TableSection {
    fn over(self, base: TableConfig) -> TableConfig {
        TableConfig {
            keys: self.keys.unwrap_or(base.keys),
            key_range: self.key_range.unwrap_or(base.key_range),
            table_size: self.table_size.unwrap_or(base.table_size),
            constant: self.constant.unwrap_or(base.constant),
        }
    }
}

impl TableConfig {
    pub fn chaining() -> Self {
        Self { keys: 15, key_range: 100, table_size: 10, constant: KNUTH }
    }

    /// Sized so 1000 keys leave the table about two thirds full.
    pub fn probing() -> Self {
        Self { keys: 1000, key_range: 1000, table_size: 1550, constant: KNUTH }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LabSections")]
pub struct LabConfig {
    pub chaining: TableConfig,
    pub probing: TableConfig,
    pub compare: ExperimentConfig,
}

#[derive(Deserialize)]
struct LabSections {
    #[serde(default)]
    chaining: TableSection,

    #[serde(default)]
    probing: TableSection,

    #[serde(default)]
    compare: ExperimentConfig,
}

impl From<LabSections> for LabConfig {
    fn from(sections: LabSections) -> Self {
        Self {
            chaining: sections.chaining.over(TableConfig::chaining()),
            probing: sections.probing.over(TableConfig::probing()),
            compare: sections.compare,
        }
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            chaining: TableConfig::chaining(),
            probing: TableConfig::probing(),
            compare: ExperimentConfig::default(),
        }
    }
}

impl LabConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
