//! # Authorization Gate
//!
//! Bearer-token middleware for protected routes. On success the
//! resolved identity is attached to the request extensions, where
//! handlers read it with `Extension<Identity>`.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::auth::{AuthError, TokenSigner};
use crate::store::Scope;

/// The authenticated account behind a request.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub account_id: Uuid,
}

impl Identity {
    /// Store scope for this account.
    pub fn scope(&self) -> Scope {
        Scope::account(self.account_id)
    }
}

/// Reject the request unless it carries a valid bearer token.
pub async fn require_account(
    State(signer): State<Arc<TokenSigner>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers()).ok_or(AuthError::MissingToken)?;
    let account_id = signer.verify(token)?;

    request.extensions_mut().insert(Identity { account_id });
    Ok(next.run(request).await)
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
