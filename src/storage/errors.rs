//! Storage error types.
//!
//! Not-found is NOT an error at this layer: lookups return `Option` and
//! mutations report rows affected, so callers can tell a missing row apart
//! from a real backend failure.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage backend errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Failed to open a database connection
    #[error("Failed to open database: {0}")]
    Open(String),

    /// A statement failed to prepare or execute
    #[error("Query failed: {0}")]
    Query(String),

    /// Primary-key or other constraint violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A pooled connection's mutex was poisoned
    #[error("Connection pool lock poisoned: {0}")]
    PoolLock(String),

    /// The blocking task running the statement was cancelled or panicked
    #[error("Storage task failed: {0}")]
    Join(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StorageError::Constraint(err.to_string())
            }
            _ => StorageError::Query(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::Open("no such directory".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to open database: no such directory"
        );
    }

    #[test]
    fn test_constraint_violation_is_classified() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id TEXT PRIMARY KEY); INSERT INTO t VALUES ('a');")
            .unwrap();
        let err = conn
            .execute("INSERT INTO t (id) VALUES (?1)", rusqlite::params!["a"])
            .unwrap_err();
        assert!(matches!(StorageError::from(err), StorageError::Constraint(_)));
    }
}
