//! The contact entity and its request payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored contact. `id` is assigned by the server on creation and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}

/// The caller-supplied part of a contact. There is deliberately no `id`
/// field: whatever the caller sends under that key is dropped during
/// deserialization, so ids are always server-generated.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub number: String,
}

impl Contact {
    /// Mint a new contact from a payload, assigning a fresh UUID v4 id.
    pub fn create(payload: ContactPayload) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            number: payload.number,
        }
    }

    /// Rebuild a contact from its stored parts (e.g. a path id plus an
    /// update payload).
    pub fn from_parts(id: impl Into<String>, payload: ContactPayload) -> Self {
        Self {
            id: id.into(),
            name: payload.name,
            number: payload.number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_uuid() {
        let contact = Contact::create(ContactPayload {
            name: "Ada".to_string(),
            number: "555-1111".to_string(),
        });

        assert!(!contact.id.is_empty());
        assert!(Uuid::parse_str(&contact.id).is_ok());
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.number, "555-1111");
    }

    #[test]
    fn test_create_ids_are_unique() {
        let payload = ContactPayload {
            name: "Ada".to_string(),
            number: "555-1111".to_string(),
        };
        let a = Contact::create(payload.clone());
        let b = Contact::create(payload);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_payload_ignores_caller_id() {
        let payload: ContactPayload =
            serde_json::from_str(r#"{"id":"attacker-chosen","name":"Ada","number":"1"}"#).unwrap();
        let contact = Contact::create(payload);
        assert_ne!(contact.id, "attacker-chosen");
    }

    #[test]
    fn test_from_parts_keeps_given_id() {
        let contact = Contact::from_parts(
            "c1",
            ContactPayload {
                name: "Ada L.".to_string(),
                number: "555-2222".to_string(),
            },
        );
        assert_eq!(contact.id, "c1");
        assert_eq!(contact.name, "Ada L.");
    }
}
