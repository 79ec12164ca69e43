//! # Record Access
//!
//! The `RecordStore` trait is the data-access seam between domain services
//! and storage backends. Backends implement the raw find/insert/update/
//! delete primitives; the provided scoped methods centralize owner scoping
//! so a mutation without a [`Scope`] cannot be written, and only kinds that
//! declare an owner field have mutations at all.

use async_trait::async_trait;

use super::errors::StoreResult;
use super::filter::{Filter, Patch};
use super::record::{OwnedRecord, Record, Scope};

/// Generic CRUD over record kinds.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Returns all records matching the filter, in store-native order.
    ///
    /// An empty filter returns every record of the kind.
    async fn find_many<R: Record>(&self, filter: Filter<R>) -> StoreResult<Vec<R>>;

    /// Persists a record as given. Identity is assigned by the record's
    /// constructor, not the store, so a record value never exists without
    /// an id.
    async fn insert<R: Record>(&self, record: &R) -> StoreResult<()>;

    /// Backend primitive behind [`RecordStore::update_one`]: applies the
    /// patch to the single matching record and returns the post-update
    /// state, or `None` when nothing matched.
    #[doc(hidden)]
    async fn update_raw<R: Record>(
        &self,
        filter: Filter<R>,
        patch: Patch<R>,
    ) -> StoreResult<Option<R>>;

    /// Backend primitive behind [`RecordStore::delete_one`]: removes and
    /// returns the single matching record, or `None` when nothing matched.
    #[doc(hidden)]
    async fn delete_raw<R: Record>(&self, filter: Filter<R>) -> StoreResult<Option<R>>;

    /// [`RecordStore::find_many`] restricted to records owned by `scope`.
    async fn find_scoped<R: OwnedRecord>(
        &self,
        scope: &Scope,
        filter: Filter<R>,
    ) -> StoreResult<Vec<R>> {
        self.find_many(filter.scoped_to(scope)).await
    }

    /// Updates the one record matching the filter and owned by `scope`,
    /// returning the post-update record. `None` when nothing matches; a
    /// record owned by someone else is indistinguishable from a missing
    /// one. An empty patch degrades to a scoped read.
    async fn update_one<R: OwnedRecord>(
        &self,
        scope: &Scope,
        filter: Filter<R>,
        patch: Patch<R>,
    ) -> StoreResult<Option<R>> {
        let filter = filter.scoped_to(scope);
        if patch.is_empty() {
            let matches = self.find_many(filter).await?;
            return Ok(matches.into_iter().next());
        }
        self.update_raw(filter, patch).await
    }

    /// Removes the one record matching the filter and owned by `scope`,
    /// returning it. Missing and unowned collapse to `None` exactly as in
    /// [`RecordStore::update_one`].
    async fn delete_one<R: OwnedRecord>(
        &self,
        scope: &Scope,
        filter: Filter<R>,
    ) -> StoreResult<Option<R>> {
        self.delete_raw(filter.scoped_to(scope)).await
    }
}
