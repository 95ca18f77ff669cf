//! HTTP API application wiring (Axum router + store injection).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and the indented JSON response body
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use bookshelf_inventory::InventoryStore;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the store a fresh process starts with.
pub fn build_store(config: &ApiConfig) -> Arc<InventoryStore> {
    let store = if config.seed {
        InventoryStore::seeded()
    } else {
        InventoryStore::new()
    };
    tracing::info!(books = store.len(), "inventory ready");
    Arc::new(store)
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: Arc<InventoryStore>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(store))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_log)))
}
