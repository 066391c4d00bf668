//! CLI-specific error types. All CLI errors are fatal: they print to stderr
//! and the process exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Storage could not be opened or initialized
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// The async runtime or listener failed to start
    #[error("Server failed: {0}")]
    Server(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Server(err.to_string())
    }
}
