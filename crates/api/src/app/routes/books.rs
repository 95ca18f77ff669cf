use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use bookshelf_inventory::{Book, InventoryStore};

use crate::app::dto::IndentedJson;
use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", get(get_book))
}

pub async fn list_books(Extension(store): Extension<Arc<InventoryStore>>) -> impl IntoResponse {
    IndentedJson(store.list())
}

pub async fn get_book(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Book>, ApiError> {
    Ok(IndentedJson(store.find_by_id(&id)?))
}

pub async fn create_book(
    Extension(store): Extension<Arc<InventoryStore>>,
    body: Result<Json<Book>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(book) = body?;
    let created = store.create(book);
    tracing::info!(book_id = %created.id, quantity = created.quantity, "book created");
    Ok((StatusCode::CREATED, IndentedJson(created)))
}
