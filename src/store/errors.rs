//! # Store Errors
//!
//! Error types for the record store. Every variant surfaces as a generic
//! 500 at the HTTP boundary; the detail strings are for logs only.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Could not reach the document store at startup
    #[error("Store connection failed: {0}")]
    ConnectionFailed(String),

    /// A query, insert, update, or delete failed at the driver level
    #[error("Store query failed: {0}")]
    Query(String),

    /// A record could not be converted to or from its stored form
    #[error("Record serialization failed: {0}")]
    Serialization(String),

    /// The in-memory backend's lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Query(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for StoreError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
