//! # Auth Errors
//!
//! Error types for credential and token operations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::http::response::message_response;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Credential and token errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // ==================
    // Token Errors
    // ==================
    /// No bearer token on a protected request
    #[error("Missing authorization header")]
    MissingToken,

    /// Token has expired
    #[error("Token expired")]
    TokenExpired,

    /// Token signature does not match the server secret
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token is structurally invalid or carries a bad subject
    #[error("Malformed token")]
    MalformedToken,

    // ==================
    // Internal Errors
    // ==================
    /// Password hashing failed
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// Stored password hash could not be parsed
    #[error("Internal error: password verification failed")]
    VerificationFailed,

    /// Token signing failed
    #[error("Internal error: token signing failed")]
    TokenSigningFailed,
}

impl AuthError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::TokenExpired
            | AuthError::InvalidSignature
            | AuthError::MalformedToken => StatusCode::UNAUTHORIZED,

            AuthError::HashingFailed
            | AuthError::VerificationFailed
            | AuthError::TokenSigningFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is the client's fault
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AuthError::MissingToken => "Access denied. No token provided.",
            AuthError::TokenExpired | AuthError::InvalidSignature | AuthError::MalformedToken => {
                "Invalid token."
            }
            _ => {
                error!(error = %self, "auth operation failed");
                "Internal server error"
            }
        };
        message_response(status, message)
    }
}
