//! Schema bootstrap for the contacts table.

use rusqlite::Connection;

use super::errors::StorageResult;

/// Create the contacts table if it does not exist. Idempotent; applied at
/// pool open and by the `init` command.
pub fn ensure_schema(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS contacts (
            id     TEXT PRIMARY KEY,
            name   TEXT NOT NULL,
            number TEXT NOT NULL
        );",
    )?;
    Ok(())
}
