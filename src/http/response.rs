//! # Response Shapes
//!
//! The message body shared by error responses and status-only replies.
//! A 204 carries no body on the wire; its message stays on the error
//! type for logs and assertions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `{"message": "..."}` body
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build a response from a status code and message, dropping the body
/// where the status forbids one.
pub fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    if status == StatusCode::NO_CONTENT {
        return status.into_response();
    }
    (status, Json(Message::new(message))).into_response()
}
