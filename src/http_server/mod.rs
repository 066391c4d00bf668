//! # Contact HTTP Server Module
//!
//! Axum router and handlers for the contact CRUD API.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /contacts` - List all contacts
//! - `GET /contacts/{id}` - Fetch one contact
//! - `POST /contacts` - Create a contact (server assigns the id)
//! - `PUT /contacts/{id}` - Update name/number
//! - `DELETE /contacts/{id}` - Delete a contact

pub mod config;
pub mod contact_routes;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use contact_routes::{contact_routes, ContactsState};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
