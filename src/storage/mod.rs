//! SQLite persistence for contacts: connection pool, schema bootstrap, and
//! the five CRUD statements behind an async facade.

pub mod contacts;
pub mod errors;
pub mod pool;
pub mod schema;
pub mod store;

pub use errors::{StorageError, StorageResult};
pub use pool::ConnectionPool;
pub use store::ContactStore;
