use serde::{Deserialize, Serialize};

/// Caller-supplied book identifier.
///
/// Not validated for format or uniqueness: any string (including the empty
/// string) is a valid id as far as the record model is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::borrow::Borrow<str> for BookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single book record.
///
/// `quantity` is the number of copies available for checkout. It is signed so
/// that whatever the caller sends on create is stored as-is. Fields absent
/// from a decoded body take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl Book {
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_serializes_with_flat_field_names() {
        let book = Book::new("7", "Dune", "Frank Herbert", 3);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            json!({ "id": "7", "title": "Dune", "author": "Frank Herbert", "quantity": 3 })
        );
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let book: Book =
            serde_json::from_value(json!({ "id": "5", "title": "t", "author": "a" })).unwrap();
        assert_eq!(book, Book::new("5", "t", "a", 0));

        let book: Book = serde_json::from_str("{}").unwrap();
        assert_eq!(book, Book::default());
        assert!(book.id.is_empty());
    }

    #[test]
    fn book_rejects_non_object_body() {
        assert!(serde_json::from_str::<Book>(r#""text""#).is_err());
        assert!(serde_json::from_str::<Book>(r#"{"id": 5}"#).is_err());
    }

    #[test]
    fn book_rejects_non_integer_quantity() {
        let res = serde_json::from_value::<Book>(
            json!({ "id": "1", "title": "t", "author": "a", "quantity": "two" }),
        );
        assert!(res.is_err());
    }

    #[test]
    fn book_accepts_empty_strings_and_negative_quantity() {
        let book: Book = serde_json::from_value(
            json!({ "id": "", "title": "", "author": "", "quantity": -4 }),
        )
        .unwrap();
        assert!(book.id.is_empty());
        assert_eq!(book.quantity, -4);
    }
}
