//! # Review Records
//!
//! A review ties a piece of text and a rating to a book and its author.
//! Anyone may read a book's reviews; only the author may delete one, so
//! the owning field for scoped operations is the author reference.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{OwnedRecord, Record, RecordField};

/// A review of a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub rating: i32,
    pub book_id: Uuid,
    pub author_account_id: Uuid,
}

impl Review {
    /// Creates a review with a fresh id, authored by `author_account_id`.
    pub fn new(text: String, rating: i32, book_id: Uuid, author_account_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            rating,
            book_id,
            author_account_id,
        }
    }
}

/// Queryable review fields
#[derive(Debug, Clone, Copy)]
pub enum ReviewField {
    Id,
    BookId,
    Author,
}

impl RecordField for ReviewField {
    fn as_str(self) -> &'static str {
        match self {
            ReviewField::Id => "_id",
            ReviewField::BookId => "bookId",
            ReviewField::Author => "authorAccountId",
        }
    }
}

impl Record for Review {
    const KIND: &'static str = "reviews";
    type Field = ReviewField;
}

impl OwnedRecord for Review {
    const OWNER_FIELD: ReviewField = ReviewField::Author;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_review_serializes_with_store_field_names() {
        let book_id = Uuid::new_v4();
        let author = Uuid::new_v4();
        let review = Review::new("A classic.".to_string(), 4, book_id, author);
        let doc = bson::to_document(&review).unwrap();

        assert_eq!(doc.get_str("_id").unwrap(), review.id.to_string());
        assert_eq!(doc.get_str("text").unwrap(), "A classic.");
        assert_eq!(doc.get_i32("rating").unwrap(), 4);
        assert_eq!(doc.get_str("bookId").unwrap(), book_id.to_string());
        assert_eq!(doc.get_str("authorAccountId").unwrap(), author.to_string());
    }

    #[test]
    fn test_author_is_the_owning_field() {
        assert_eq!(Review::OWNER_FIELD.as_str(), "authorAccountId");
    }
}
