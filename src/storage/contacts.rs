//! The five SQL operations over the contacts table.
//!
//! Every statement carries an explicit column list and `?n` placeholders;
//! user input never reaches the SQL text itself. Lookups distinguish "no
//! such row" (`None` / `false`) from backend failures (`Err`).

use rusqlite::{params, Connection, OptionalExtension};

use crate::contact::Contact;

use super::errors::StorageResult;

/// List every stored contact in backend default order.
pub fn list_all(conn: &Connection) -> StorageResult<Vec<Contact>> {
    let mut stmt = conn.prepare("SELECT id, name, number FROM contacts")?;
    let rows = stmt
        .query_map([], row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Fetch a single contact by id. `None` when no row matches.
pub fn get_by_id(conn: &Connection, id: &str) -> StorageResult<Option<Contact>> {
    let contact = conn
        .query_row(
            "SELECT id, name, number FROM contacts WHERE id = ?1",
            params![id],
            row_to_contact,
        )
        .optional()?;
    Ok(contact)
}

/// Insert a new contact. A duplicate id surfaces as a constraint error.
pub fn insert(conn: &Connection, contact: &Contact) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO contacts (id, name, number) VALUES (?1, ?2, ?3)",
        params![contact.id, contact.name, contact.number],
    )?;
    Ok(())
}

/// Update name and number for an existing id. Returns `false` when zero
/// rows were affected (no such contact).
pub fn update(conn: &Connection, id: &str, name: &str, number: &str) -> StorageResult<bool> {
    let rows = conn.execute(
        "UPDATE contacts SET name = ?1, number = ?2 WHERE id = ?3",
        params![name, number, id],
    )?;
    Ok(rows > 0)
}

/// Delete a contact by id. Returns `false` when zero rows were affected.
pub fn delete(conn: &Connection, id: &str) -> StorageResult<bool> {
    let rows = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
    Ok(rows > 0)
}

/// Map one row of `SELECT id, name, number` to a Contact.
fn row_to_contact(row: &rusqlite::Row<'_>) -> Result<Contact, rusqlite::Error> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        number: row.get(2)?,
    })
}
