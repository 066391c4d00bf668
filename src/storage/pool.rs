//! Fixed-size pool of SQLite connections, opened once at process start.
//!
//! Connections are handed out round-robin behind mutexes. WAL mode lets
//! concurrent readers proceed while a writer holds the database; writers
//! contend on SQLite's own locking with a busy timeout.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::Connection;

use super::errors::{StorageError, StorageResult};
use super::schema;

/// Default number of pooled connections.
const DEFAULT_POOL_SIZE: usize = 4;

/// Maximum number of pooled connections.
const MAX_POOL_SIZE: usize = 8;

/// A pool of connections to one database file.
pub struct ConnectionPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
    db_path: PathBuf,
}

impl ConnectionPool {
    /// Open a pool against the given database file, applying pragmas to
    /// every connection and bootstrapping the schema.
    pub fn open(path: &Path, pool_size: usize) -> StorageResult<Self> {
        let size = pool_size.clamp(1, MAX_POOL_SIZE);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open(path)
                .map_err(|e| StorageError::Open(e.to_string()))?;
            apply_pragmas(&conn)?;
            connections.push(Mutex::new(conn));
        }

        let pool = Self {
            connections,
            next: AtomicUsize::new(0),
            db_path: path.to_path_buf(),
        };
        pool.with_conn(schema::ensure_schema)?;
        Ok(pool)
    }

    /// Execute a closure with a connection from the pool (round-robin).
    /// The guard is released on every exit path, including errors.
    pub fn with_conn<F, T>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> StorageResult<T>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|e| StorageError::PoolLock(e.to_string()))?;
        f(&guard)
    }

    /// Number of connections in the pool.
    pub fn size(&self) -> usize {
        self.connections.len()
    }

    /// Default pool size.
    pub fn default_size() -> usize {
        DEFAULT_POOL_SIZE
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

/// Apply safety and contention pragmas to a connection.
fn apply_pragmas(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| StorageError::Open(e.to_string()))?;
    Ok(())
}
