//! # Catalog Errors
//!
//! Error types for the book catalog. "Not found" and "not owned" are
//! deliberately indistinguishable: both surface as a bare 204, and the
//! message string stays in the error type for logs and tests.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::http::response::message_response;
use crate::store::StoreError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Book catalog errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Create body is missing title, author, or genre
    #[error("Title, author, and genre are required.")]
    MissingFields,

    /// No book matches the id within the caller's scope
    #[error("Book not found or unauthorized.")]
    NotFound,

    /// The scoped listing matched nothing
    #[error("Books not found or unauthorized.")]
    NoneFound,

    /// Store operation failed
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::MissingFields => StatusCode::BAD_REQUEST,
            CatalogError::NotFound | CatalogError::NoneFound => StatusCode::NO_CONTENT,
            CatalogError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "catalog operation failed");
            return message_response(status, "Internal server error");
        }
        message_response(status, self.to_string())
    }
}
