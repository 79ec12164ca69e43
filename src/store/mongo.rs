//! # MongoDB Store
//!
//! The production `RecordStore` backend. The store is connected once at
//! startup with an explicit readiness check; after that the driver's pooled
//! client handles connection reuse, so record operations never re-connect.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::config::StoreConfig;

use super::access::RecordStore;
use super::errors::{StoreError, StoreResult};
use super::filter::{Filter, Patch};
use super::record::Record;

/// MongoDB-backed record store.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects to the configured store and verifies it answers a ping.
    ///
    /// A failure here (bad URI, unreachable server, refused ping) is
    /// returned to the caller; the process must not start serving without
    /// a reachable store.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        info!(database = %config.database, "connected to document store");
        Ok(Self { database })
    }

    fn collection<R: Record>(&self) -> Collection<R> {
        self.database.collection::<R>(R::KIND)
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn find_many<R: Record>(&self, filter: Filter<R>) -> StoreResult<Vec<R>> {
        let cursor = self
            .collection::<R>()
            .find(filter.into_document(), None)
            .await?;
        let records = cursor.try_collect().await?;
        Ok(records)
    }

    async fn insert<R: Record>(&self, record: &R) -> StoreResult<()> {
        self.collection::<R>().insert_one(record, None).await?;
        Ok(())
    }

    async fn update_raw<R: Record>(
        &self,
        filter: Filter<R>,
        patch: Patch<R>,
    ) -> StoreResult<Option<R>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .collection::<R>()
            .find_one_and_update(filter.into_document(), patch.into_update_document(), options)
            .await?;
        Ok(updated)
    }

    async fn delete_raw<R: Record>(&self, filter: Filter<R>) -> StoreResult<Option<R>> {
        let removed = self
            .collection::<R>()
            .find_one_and_delete(filter.into_document(), None)
            .await?;
        Ok(removed)
    }
}
