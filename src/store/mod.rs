//! # Record Store
//!
//! Generic document persistence for the catalog. Records declare their
//! collection and queryable fields through the [`Record`] trait, queries are
//! built with the typed [`Filter`] and [`Patch`] builders, and the
//! [`RecordStore`] trait is the single seam domain services talk through.
//!
//! Two backends: [`MongoStore`] for production, [`MemoryStore`] for tests.

pub mod access;
pub mod errors;
pub mod filter;
pub mod memory;
pub mod mongo;
pub mod record;

pub use access::RecordStore;
pub use errors::{StoreError, StoreResult};
pub use filter::{Filter, Patch};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use record::{OwnedRecord, Record, RecordField, Scope};
