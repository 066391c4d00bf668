//! Storage-layer integration tests against a real database file.
//!
//! Exercised through the async store facade, the same path the HTTP
//! handlers use.

use contactd::contact::{Contact, ContactPayload};
use contactd::storage::{ContactStore, StorageError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn open_store() -> (TempDir, ContactStore) {
    let tmp = TempDir::new().unwrap();
    let store = ContactStore::open(&tmp.path().join("contacts.db"), 4).unwrap();
    (tmp, store)
}

fn payload(name: &str, number: &str) -> ContactPayload {
    ContactPayload {
        name: name.to_string(),
        number: number.to_string(),
    }
}

// =============================================================================
// Round-trip and identity
// =============================================================================

/// A created contact reads back with identical name and number.
#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (_tmp, store) = open_store();

    let contact = Contact::create(payload("Ada", "555-1111"));
    store.insert(contact.clone()).await.unwrap();

    let found = store.get_by_id(contact.id.clone()).await.unwrap().unwrap();
    assert_eq!(found.name, "Ada");
    assert_eq!(found.number, "555-1111");
    assert_eq!(found.id, contact.id);
}

/// Updating a contact changes its fields but never its id.
#[tokio::test]
async fn test_update_preserves_identity() {
    let (_tmp, store) = open_store();

    let contact = Contact::create(payload("Ada", "555-1111"));
    store.insert(contact.clone()).await.unwrap();

    let updated = store
        .update(
            contact.id.clone(),
            "Ada L.".to_string(),
            "555-2222".to_string(),
        )
        .await
        .unwrap();
    assert!(updated);

    let found = store.get_by_id(contact.id.clone()).await.unwrap().unwrap();
    assert_eq!(found.id, contact.id);
    assert_eq!(found.name, "Ada L.");
    assert_eq!(found.number, "555-2222");
}

// =============================================================================
// Not-found vs error disambiguation
// =============================================================================

/// A missing id is None / false, never an Err.
#[tokio::test]
async fn test_missing_id_is_not_an_error() {
    let (_tmp, store) = open_store();

    assert!(store.get_by_id("ghost".to_string()).await.unwrap().is_none());
    assert!(!store
        .update("ghost".to_string(), "x".to_string(), "y".to_string())
        .await
        .unwrap());
    assert!(!store.delete("ghost".to_string()).await.unwrap());
}

/// Deleting twice succeeds once, then reports not-found.
#[tokio::test]
async fn test_double_delete() {
    let (_tmp, store) = open_store();

    let contact = Contact::create(payload("Ada", "555-1111"));
    let id = contact.id.clone();
    store.insert(contact).await.unwrap();

    assert!(store.delete(id.clone()).await.unwrap());
    assert!(!store.delete(id).await.unwrap());
}

/// Inserting the same id twice hits the primary-key constraint.
#[tokio::test]
async fn test_duplicate_id_insert_fails() {
    let (_tmp, store) = open_store();

    let contact = Contact::create(payload("Ada", "555-1111"));
    store.insert(contact.clone()).await.unwrap();

    let err = store.insert(contact).await.unwrap_err();
    assert!(matches!(err, StorageError::Constraint(_)));
}

// =============================================================================
// Listing
// =============================================================================

/// After N creates and M deletes the list holds exactly N-M contacts with
/// no duplicate ids.
#[tokio::test]
async fn test_list_after_creates_and_deletes() {
    let (_tmp, store) = open_store();

    let mut ids = Vec::new();
    for i in 0..6 {
        let contact = Contact::create(payload(&format!("person-{i}"), &format!("555-000{i}")));
        ids.push(contact.id.clone());
        store.insert(contact).await.unwrap();
    }
    for id in ids.iter().take(2) {
        assert!(store.delete(id.clone()).await.unwrap());
    }

    let contacts = store.list_all().await.unwrap();
    assert_eq!(contacts.len(), 4);

    let mut seen: Vec<_> = contacts.iter().map(|c| c.id.clone()).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 4);
    for id in &ids[..2] {
        assert!(!seen.contains(id));
    }
}

/// An empty table lists as an empty vec, not an error.
#[tokio::test]
async fn test_list_empty() {
    let (_tmp, store) = open_store();
    assert!(store.list_all().await.unwrap().is_empty());
}

// =============================================================================
// Concurrency
// =============================================================================

/// Concurrent inserts through one pool all land; ids stay unique.
#[tokio::test]
async fn test_concurrent_inserts() {
    let (_tmp, store) = open_store();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let contact = Contact::create(payload(&format!("p{i}"), "555"));
            store.insert(contact).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let contacts = store.list_all().await.unwrap();
    assert_eq!(contacts.len(), 16);
}
