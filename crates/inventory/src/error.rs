//! Inventory error model.

use thiserror::Error;

/// Result type used by inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Failures an inventory operation can report.
///
/// The `Display` text of each variant is the exact message surfaced to HTTP
/// clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A required parameter was absent or empty.
    #[error("Missing {0}")]
    MissingParameter(&'static str),

    /// No record carries the requested id.
    #[error("Book not found")]
    NotFound,

    /// Checkout requested on a record with no copies left.
    #[error("Book out of stock")]
    OutOfStock,
}

impl InventoryError {
    pub fn missing(param: &'static str) -> Self {
        Self::MissingParameter(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_client_contract() {
        assert_eq!(InventoryError::missing("id").to_string(), "Missing id");
        assert_eq!(InventoryError::NotFound.to_string(), "Book not found");
        assert_eq!(InventoryError::OutOfStock.to_string(), "Book out of stock");
    }
}
