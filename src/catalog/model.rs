//! # Book Records
//!
//! A book always belongs to the account that created it; the owner
//! reference is not optional, so an unowned book cannot be constructed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{OwnedRecord, Record, RecordField};

/// A book in an account's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub owner_account_id: Uuid,
}

impl Book {
    /// Creates a book with a fresh id, owned by `owner_account_id`.
    pub fn new(title: String, author: String, genre: String, owner_account_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            genre,
            owner_account_id,
        }
    }
}

/// Queryable book fields
#[derive(Debug, Clone, Copy)]
pub enum BookField {
    Id,
    Title,
    Author,
    Genre,
    Owner,
}

impl RecordField for BookField {
    fn as_str(self) -> &'static str {
        match self {
            BookField::Id => "_id",
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Genre => "genre",
            BookField::Owner => "ownerAccountId",
        }
    }
}

impl Record for Book {
    const KIND: &'static str = "books";
    type Field = BookField;
}

impl OwnedRecord for Book {
    const OWNER_FIELD: BookField = BookField::Owner;
}
