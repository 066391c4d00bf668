//! Contact HTTP routes.
//!
//! Five handlers, one per CRUD operation, each a stateless mapping from
//! request to storage call to response. The store handle is the only shared
//! state and is injected at router build time.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::contact::{Contact, ContactPayload};
use crate::storage::ContactStore;

use super::errors::{ApiError, ApiResult};

/// Shared state for contact handlers
#[derive(Clone)]
pub struct ContactsState {
    pub store: ContactStore,
}

// ==================
// Response Types
// ==================

/// Envelope for list/get/update responses
#[derive(Debug, Serialize)]
pub struct ContactsResponse {
    pub contacts: Vec<Contact>,
}

/// Create response: confirmation message plus the stored contact
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub contact: Contact,
}

/// Delete response: confirmation message only
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Routes
// ==================

/// Create contact routes
pub fn contact_routes(state: ContactsState) -> Router {
    Router::new()
        .route("/contacts", get(list_contacts_handler))
        .route("/contacts", post(add_contact_handler))
        .route("/contacts/{id}", get(get_contact_handler))
        .route("/contacts/{id}", put(update_contact_handler))
        .route("/contacts/{id}", delete(delete_contact_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_contacts_handler(
    State(state): State<ContactsState>,
) -> ApiResult<Json<ContactsResponse>> {
    let contacts = state.store.list_all().await?;
    Ok(Json(ContactsResponse { contacts }))
}

async fn get_contact_handler(
    State(state): State<ContactsState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ContactsResponse>> {
    let contact = state.store.get_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(ContactsResponse {
        contacts: vec![contact],
    }))
}

async fn add_contact_handler(
    State(state): State<ContactsState>,
    Json(payload): Json<ContactPayload>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    // The payload has no id field, so the server-minted id always wins.
    let contact = Contact::create(payload);
    state.store.insert(contact.clone()).await?;

    tracing::debug!(id = %contact.id, "contact created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Contact successfully added".to_string(),
            contact,
        }),
    ))
}

async fn update_contact_handler(
    State(state): State<ContactsState>,
    Path(id): Path<String>,
    Json(payload): Json<ContactPayload>,
) -> ApiResult<Json<ContactsResponse>> {
    let updated = state
        .store
        .update(id.clone(), payload.name.clone(), payload.number.clone())
        .await?;
    if !updated {
        return Err(ApiError::NotFound);
    }

    // The path id is authoritative; update never reassigns it.
    Ok(Json(ContactsResponse {
        contacts: vec![Contact::from_parts(id, payload)],
    }))
}

async fn delete_contact_handler(
    State(state): State<ContactsState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = state.store.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse {
        message: "Contact successfully deleted.".to_string(),
    }))
}
