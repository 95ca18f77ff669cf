//! In-memory book inventory.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::book::{Book, BookId};
use crate::error::{InventoryError, InventoryResult};
use crate::seed;

/// Records in insertion order plus an index from id to the position of the
/// first record carrying that id.
#[derive(Debug, Default)]
struct Shelf {
    books: Vec<Book>,
    index: HashMap<BookId, usize>,
}

impl Shelf {
    fn push(&mut self, book: Book) -> usize {
        let pos = self.books.len();
        // Duplicate ids keep pointing at the earliest record.
        self.index.entry(book.id.clone()).or_insert(pos);
        self.books.push(book);
        pos
    }

    fn position(&self, id: &str) -> InventoryResult<usize> {
        self.index.get(id).copied().ok_or(InventoryError::NotFound)
    }
}

/// Authoritative owner of every book record.
///
/// Reads share a read lock; each mutating operation runs its whole
/// lookup-check-update sequence under the write lock. Callers get owned
/// snapshots of records, never references into the store.
#[derive(Debug, Default)]
pub struct InventoryStore {
    inner: RwLock<Shelf>,
}

impl InventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the default fixture books.
    pub fn seeded() -> Self {
        Self::with_books(seed::default_books())
    }

    /// Create a store holding `books` in the given order.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut shelf = Shelf::default();
        for book in books {
            shelf.push(book);
        }
        Self {
            inner: RwLock::new(shelf),
        }
    }

    // Every critical section leaves the shelf consistent, so a poisoned lock
    // still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, Shelf> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shelf> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    pub fn len(&self) -> usize {
        self.read().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().books.is_empty()
    }

    /// First record whose id equals `id` exactly.
    pub fn find_by_id(&self, id: &str) -> InventoryResult<Book> {
        let shelf = self.read();
        let pos = shelf.position(id)?;
        Ok(shelf.books[pos].clone())
    }

    /// Append `book` unconditionally and return the stored record.
    pub fn create(&self, book: Book) -> Book {
        let mut shelf = self.write();
        let pos = shelf.push(book);
        let stored = shelf.books[pos].clone();
        tracing::debug!(book_id = %stored.id, total = shelf.books.len(), "book added");
        stored
    }

    /// Take one copy of the book out of stock.
    pub fn checkout(&self, id: &str) -> InventoryResult<Book> {
        if id.is_empty() {
            return Err(InventoryError::missing("id"));
        }

        let mut shelf = self.write();
        let pos = shelf.position(id)?;
        let book = &mut shelf.books[pos];
        if book.is_out_of_stock() {
            return Err(InventoryError::OutOfStock);
        }
        // A record created at i64::MIN has nothing left to lend either.
        book.quantity = book.quantity.checked_sub(1).ok_or(InventoryError::OutOfStock)?;
        tracing::debug!(book_id = %book.id, quantity = book.quantity, "book checked out");
        Ok(book.clone())
    }

    /// Put one copy of the book back. There is no upper bound.
    pub fn return_copy(&self, id: &str) -> InventoryResult<Book> {
        if id.is_empty() {
            return Err(InventoryError::missing("id"));
        }

        let mut shelf = self.write();
        let pos = shelf.position(id)?;
        let book = &mut shelf.books[pos];
        book.quantity = book.quantity.saturating_add(1);
        tracing::debug!(book_id = %book.id, quantity = book.quantity, "book returned");
        Ok(book.clone())
    }
}
