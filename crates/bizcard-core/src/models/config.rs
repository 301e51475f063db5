//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BizcardError, Result};

/// Main configuration for the bizcard pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BizcardConfig {
    /// Persistence configuration.
    pub database: DatabaseConfig,

    /// Classifier behavior.
    pub extraction: ExtractionConfig,
}

/// Persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file holding the `bizcard_info` table.
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("bizcard.db"),
        }
    }
}

/// Classifier behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Emit a warning when fewer than two fragments were recognized
    /// (name/designation positions cannot both be filled).
    pub warn_on_short_input: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            warn_on_short_input: true,
        }
    }
}

impl BizcardConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| BizcardError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| BizcardError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
