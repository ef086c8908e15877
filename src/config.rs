//! Database configuration, loaded from TOML.
//!
//! ```toml
//! name = "EastlakeWolfpackDB"
//! version = 1
//! sanitize_input = true
//! seed_sample_data = false
//! backup_prefix = "eastlake_wolfpack"
//!
//! [storage]
//! kind = "file"
//! path = "./data"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Where records are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Process-local storage; lost when the process exits.
    #[default]
    Memory,
    /// One JSON document per collection under `path`.
    File { path: PathBuf },
}

/// Top-level database configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Schema version, written into every backup document.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Strip markup and trim string fields before persistence.
    #[serde(default = "default_true")]
    pub sanitize_input: bool,
    /// Load the sample fixtures into empty collections on open.
    #[serde(default)]
    pub seed_sample_data: bool,
    /// File name prefix for backups written to disk.
    #[serde(default = "default_backup_prefix")]
    pub backup_prefix: String,
    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_name() -> String {
    "EastlakeWolfpackDB".to_string()
}

fn default_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_backup_prefix() -> String {
    "eastlake_wolfpack".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            sanitize_input: true,
            seed_sample_data: false,
            backup_prefix: default_backup_prefix(),
            storage: StorageConfig::Memory,
        }
    }
}

impl DatabaseConfig {
    /// In-memory configuration with defaults.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// File-backed configuration rooted at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig::File { path: path.into() },
            ..Self::default()
        }
    }

    pub fn with_sample_data(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }

    pub fn with_sanitize_input(mut self, sanitize: bool) -> Self {
        self.sanitize_input = sanitize;
        self
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Booster store configuration
name = "EastlakeWolfpackDB"

# Schema version written into backup documents. Restores require version >= 1.
version = 1

# Strip <tags> and trim whitespace in string fields before storing them.
sanitize_input = true

# Populate empty collections with the sample fixtures when the database opens.
seed_sample_data = false

# Backups are written as <prefix>_backup_<YYYY-MM-DD>.json
backup_prefix = "eastlake_wolfpack"

# Storage: "memory" (default) or "file".
[storage]
kind = "memory"
# kind = "file"
# path = "./data"
"#
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| StoreError::StoreUnavailable(format!("invalid config: {}", e)))?;
        if config.version == 0 {
            return Err(StoreError::StoreUnavailable(
                "invalid config: version must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::StoreUnavailable(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StoreError::Serde(e.to_string()))
    }
}
