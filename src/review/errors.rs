//! # Review Errors
//!
//! Error types for review operations. As with the catalog, "not found"
//! and "not the author" collapse to a bare 204 on the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::http::response::message_response;
use crate::store::StoreError;

/// Result type for review operations
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Review errors
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    /// The bookId query parameter is absent
    #[error("Book ID is required.")]
    MissingBookId,

    /// The reviewId query parameter is absent
    #[error("Review ID is required.")]
    MissingReviewId,

    /// The add request is missing its book id, text, or rating
    #[error("Book ID, review text, and rating are required.")]
    MissingFields,

    /// Rating is outside the accepted range
    #[error("Rating must be between 1 and 5.")]
    RatingOutOfRange,

    /// The referenced book does not exist
    #[error("Book not found.")]
    BookMissing,

    /// No reviews matched the listing
    #[error("No reviews found for this book.")]
    NoneFound,

    /// No review matches the id within the caller's scope
    #[error("Review not found or unauthorized.")]
    NotFound,

    /// Store operation failed
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ReviewError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReviewError::MissingBookId
            | ReviewError::MissingReviewId
            | ReviewError::MissingFields
            | ReviewError::RatingOutOfRange => StatusCode::BAD_REQUEST,

            ReviewError::BookMissing | ReviewError::NoneFound | ReviewError::NotFound => {
                StatusCode::NO_CONTENT
            }

            ReviewError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "review operation failed");
            return message_response(status, "Internal server error");
        }
        message_response(status, self.to_string())
    }
}
