//! # In-Memory Store
//!
//! A `RecordStore` backend over a `RwLock`-guarded table map. Backs unit
//! and integration tests with the same observable contract as the MongoDB
//! backend; records are held as BSON documents so serialization behavior
//! matches the real store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{self, Document};

use super::access::RecordStore;
use super::errors::{StoreError, StoreResult};
use super::filter::{Filter, Patch};
use super::record::{Record, RecordField};

/// In-memory record store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<&'static str, Vec<Document>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records of a kind, for test assertions.
    pub fn count<R: Record>(&self) -> StoreResult<usize> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(collections.get(R::KIND).map_or(0, Vec::len))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_many<R: Record>(&self, filter: Filter<R>) -> StoreResult<Vec<R>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        let Some(docs) = collections.get(R::KIND) else {
            return Ok(Vec::new());
        };

        docs.iter()
            .filter(|doc| filter.matches(doc))
            .map(|doc| bson::from_document(doc.clone()).map_err(StoreError::from))
            .collect()
    }

    async fn insert<R: Record>(&self, record: &R) -> StoreResult<()> {
        let doc = bson::to_document(record)?;
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        collections.entry(R::KIND).or_default().push(doc);
        Ok(())
    }

    async fn update_raw<R: Record>(
        &self,
        filter: Filter<R>,
        patch: Patch<R>,
    ) -> StoreResult<Option<R>> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let Some(docs) = collections.get_mut(R::KIND) else {
            return Ok(None);
        };
        let Some(doc) = docs.iter_mut().find(|doc| filter.matches(doc)) else {
            return Ok(None);
        };

        for (field, value) in patch.entries() {
            doc.insert(field.as_str(), value.clone());
        }
        Ok(Some(bson::from_document(doc.clone())?))
    }

    async fn delete_raw<R: Record>(&self, filter: Filter<R>) -> StoreResult<Option<R>> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let Some(docs) = collections.get_mut(R::KIND) else {
            return Ok(None);
        };
        let Some(position) = docs.iter().position(|doc| filter.matches(doc)) else {
            return Ok(None);
        };

        let doc = docs.remove(position);
        Ok(Some(bson::from_document(doc)?))
    }
}
