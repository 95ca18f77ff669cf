//! Fixture records loaded at process start.

use crate::book::Book;

/// The three books every freshly started service holds.
pub fn default_books() -> Vec<Book> {
    vec![
        Book::new("1", "Book 1", "Author 1", 2),
        Book::new("2", "Book 2", "Author 2", 5),
        Book::new("3", "Book 3", "Author 3", 6),
    ]
}
