//! Book inventory domain.
//!
//! This crate holds the book record model and the in-memory store that owns
//! every record. It is deterministic domain logic only (no IO, no HTTP).

pub mod book;
pub mod error;
pub mod seed;
pub mod store;

pub use book::{Book, BookId};
pub use error::{InventoryError, InventoryResult};
pub use store::InventoryStore;
