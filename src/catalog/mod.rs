//! # Catalog Module
//!
//! Book records and the owner-scoped catalog CRUD.

pub mod errors;
pub mod model;
pub mod service;

pub use errors::{CatalogError, CatalogResult};
pub use model::{Book, BookField};
pub use service::{BookChanges, BookQuery, CatalogService};
