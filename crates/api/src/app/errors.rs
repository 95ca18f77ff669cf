use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use bookshelf_inventory::InventoryError;

use crate::app::dto::IndentedJson;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The request body could not be decoded into the expected shape.
    #[error("{0}")]
    MalformedInput(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Inventory(InventoryError::MissingParameter(_)) => StatusCode::BAD_REQUEST,
            ApiError::Inventory(InventoryError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Inventory(InventoryError::OutOfStock) => StatusCode::BAD_REQUEST,
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        json_error(status, self.to_string())
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, IndentedJson(json!({ "error": message.into() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_errors_map_to_client_statuses() {
        let cases = [
            (InventoryError::missing("id"), StatusCode::BAD_REQUEST),
            (InventoryError::NotFound, StatusCode::NOT_FOUND),
            (InventoryError::OutOfStock, StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn malformed_input_is_bad_request() {
        let err = ApiError::MalformedInput("expected value at line 1 column 1".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "expected value at line 1 column 1");
    }
}
