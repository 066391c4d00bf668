//! Service configuration.
//!
//! Loaded from a JSON file with every field defaulted, so a missing file
//! (or an empty `{}`) yields a runnable configuration. `CONTACTD_DB` and
//! `CONTACTD_PORT` environment variables override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::storage::ConnectionPool;

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Storage backend settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Storage backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub path: PathBuf,

    /// Number of pooled connections
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./contacts.db")
}

fn default_pool_size() -> usize {
    ConnectionPool::default_size()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            pool_size: default_pool_size(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl Config {
    /// Load configuration from a JSON file, then apply environment
    /// overrides. A missing file is not an error: defaults apply.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| ConfigError::Read(e.to_string()))?;
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CONTACTD_DB` / `CONTACTD_PORT` overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(db) = std::env::var("CONTACTD_DB") {
            self.database.path = PathBuf::from(db);
        }
        if let Ok(port) = std::env::var("CONTACTD_PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("CONTACTD_PORT: '{port}'")))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.pool_size == 0 {
            return Err(ConfigError::Invalid(
                "database.pool_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
