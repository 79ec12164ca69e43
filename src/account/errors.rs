//! # Account Errors
//!
//! Error types for signup and login. The `Display` strings of the client
//! variants double as the wire messages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::auth::AuthError;
use crate::http::response::message_response;
use crate::store::StoreError;

/// Result type for account operations
pub type AccountResult<T> = Result<T, AccountError>;

/// Account errors
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    /// Signup body is missing userName, email, or password
    #[error("User name, email, and password are required.")]
    MissingFields,

    /// Email is already registered
    #[error("Email already in use")]
    EmailTaken,

    /// No account with the given email
    #[error("User not found.")]
    UnknownAccount,

    /// Password does not match
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Credential operation failed
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Store operation failed
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl AccountError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::MissingFields | AccountError::EmailTaken => StatusCode::BAD_REQUEST,
            AccountError::UnknownAccount => StatusCode::NOT_FOUND,
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::Auth(err) => err.status_code(),
            AccountError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "account operation failed");
            return message_response(status, "Internal server error");
        }
        message_response(status, self.to_string())
    }
}
