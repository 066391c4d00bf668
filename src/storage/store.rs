//! Async facade over the contacts table.
//!
//! rusqlite is blocking, so every operation hops to the blocking thread
//! pool; handlers only ever `.await` this store.

use std::path::Path;
use std::sync::Arc;

use crate::contact::Contact;

use super::contacts;
use super::errors::{StorageError, StorageResult};
use super::pool::ConnectionPool;

/// Shared handle to the contacts store. Cheap to clone; all clones use the
/// same connection pool.
#[derive(Clone)]
pub struct ContactStore {
    pool: Arc<ConnectionPool>,
}

impl ContactStore {
    /// Open the store against a database file, creating the schema if
    /// needed.
    pub fn open(path: &Path, pool_size: usize) -> StorageResult<Self> {
        let pool = ConnectionPool::open(path, pool_size)?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    pub async fn list_all(&self) -> StorageResult<Vec<Contact>> {
        self.run(|conn| contacts::list_all(conn)).await
    }

    pub async fn get_by_id(&self, id: String) -> StorageResult<Option<Contact>> {
        self.run(move |conn| contacts::get_by_id(conn, &id)).await
    }

    pub async fn insert(&self, contact: Contact) -> StorageResult<()> {
        self.run(move |conn| contacts::insert(conn, &contact)).await
    }

    pub async fn update(&self, id: String, name: String, number: String) -> StorageResult<bool> {
        self.run(move |conn| contacts::update(conn, &id, &name, &number))
            .await
    }

    pub async fn delete(&self, id: String) -> StorageResult<bool> {
        self.run(move |conn| contacts::delete(conn, &id)).await
    }

    /// Run a storage closure on the blocking pool with a pooled connection.
    async fn run<F, T>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> StorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || pool.with_conn(f))
            .await
            .map_err(|e| StorageError::Join(e.to_string()))?
    }
}
