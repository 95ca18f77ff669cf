//! Checkout and return of individual copies.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Query, rejection::QueryRejection},
    routing::patch,
};

use bookshelf_inventory::{Book, InventoryStore};

use crate::app::dto::{CirculationQuery, IndentedJson};
use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/checkout", patch(checkout_book))
        .route("/return", patch(return_book))
}

// An absent `id` and `?id=` both reach the store as the empty string, which it
// reports as a missing parameter. A repeated `id` uses its first value.

pub async fn checkout_book(
    Extension(store): Extension<Arc<InventoryStore>>,
    query: Result<Query<CirculationQuery>, QueryRejection>,
) -> Result<IndentedJson<Book>, ApiError> {
    let Query(query) = query?;
    let id = query.id();
    let book = store.checkout(id)?;
    tracing::info!(book_id = %book.id, quantity = book.quantity, "book checked out");
    Ok(IndentedJson(book))
}

pub async fn return_book(
    Extension(store): Extension<Arc<InventoryStore>>,
    query: Result<Query<CirculationQuery>, QueryRejection>,
) -> Result<IndentedJson<Book>, ApiError> {
    let Query(query) = query?;
    let id = query.id();
    let book = store.return_copy(id)?;
    tracing::info!(book_id = %book.id, quantity = book.quantity, "book returned");
    Ok(IndentedJson(book))
}
