use axum::Router;

pub mod books;
pub mod circulation;
pub mod system;

/// Router for all book endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(books::router())
        .merge(circulation::router())
}
