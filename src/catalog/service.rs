//! # Catalog Service
//!
//! Owner-scoped book CRUD. Every operation takes the caller's [`Scope`],
//! and the store appends it to each query, so one account can never see or
//! touch another account's books.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::store::{Filter, Patch, RecordStore, Scope};

use super::errors::{CatalogError, CatalogResult};
use super::model::{Book, BookField};

/// Optional equality filters for listing books.
///
/// Unknown query parameters are ignored; empty values are treated as
/// absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}

/// Field changes for updating a book. Absent and empty fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}

/// Owner-scoped book CRUD.
pub struct CatalogService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> CatalogService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates a book owned by the caller.
    pub async fn add(
        &self,
        scope: &Scope,
        title: String,
        author: String,
        genre: String,
    ) -> CatalogResult<Book> {
        let book = Book::new(title, author, genre, scope.account_id());
        self.store.insert(&book).await?;

        info!(title = %book.title, author = %book.author, "book added");
        Ok(book)
    }

    /// Lists the caller's books, optionally narrowed by query filters.
    pub async fn list(&self, scope: &Scope, query: BookQuery) -> CatalogResult<Vec<Book>> {
        let mut filter = Filter::new();
        if let Some(title) = non_empty(query.title) {
            filter = filter.eq(BookField::Title, title);
        }
        if let Some(author) = non_empty(query.author) {
            filter = filter.eq(BookField::Author, author);
        }
        if let Some(genre) = non_empty(query.genre) {
            filter = filter.eq(BookField::Genre, genre);
        }

        Ok(self.store.find_scoped(scope, filter).await?)
    }

    /// Fetches one of the caller's books by id.
    pub async fn fetch(&self, scope: &Scope, id: Uuid) -> CatalogResult<Book> {
        let matches = self
            .store
            .find_scoped(scope, Filter::new().eq(BookField::Id, id.to_string()))
            .await?;
        matches.into_iter().next().ok_or(CatalogError::NotFound)
    }

    /// Applies the given changes to one of the caller's books and returns
    /// the updated record.
    pub async fn update(&self, scope: &Scope, id: Uuid, changes: BookChanges) -> CatalogResult<Book> {
        let mut patch = Patch::new();
        if let Some(title) = non_empty(changes.title) {
            patch = patch.set(BookField::Title, title);
        }
        if let Some(author) = non_empty(changes.author) {
            patch = patch.set(BookField::Author, author);
        }
        if let Some(genre) = non_empty(changes.genre) {
            patch = patch.set(BookField::Genre, genre);
        }

        let updated = self
            .store
            .update_one(scope, Filter::new().eq(BookField::Id, id.to_string()), patch)
            .await?;
        updated.ok_or(CatalogError::NotFound)
    }

    /// Deletes one of the caller's books and returns it.
    pub async fn remove(&self, scope: &Scope, id: Uuid) -> CatalogResult<Book> {
        let removed = self
            .store
            .delete_one(scope, Filter::new().eq(BookField::Id, id.to_string()))
            .await?;
        removed.ok_or(CatalogError::NotFound)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
