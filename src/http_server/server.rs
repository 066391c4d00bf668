//! # HTTP Server
//!
//! Binds the contact routes (plus a health check) to a TCP listener, with
//! CORS and request tracing layers.

use std::net::SocketAddr;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::storage::ContactStore;

use super::config::HttpServerConfig;
use super::contact_routes::{contact_routes, ContactsState};

/// HTTP server for the contact service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store with default configuration
    pub fn new(store: ContactStore) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a server over the given store with custom configuration
    pub fn with_config(config: HttpServerConfig, store: ContactStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the router with all endpoints and middleware layers
    fn build_router(config: &HttpServerConfig, store: ContactStore) -> Router {
        let state = ContactsState { store };

        // Empty origin list means permissive CORS (development); otherwise
        // only the configured origins are allowed.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| match s.parse() {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        tracing::warn!(origin = %s, "ignoring malformed CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .merge(contact_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {e}", self.config.socket_addr()),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "contactd listening");
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
