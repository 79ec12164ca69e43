//! # Auth Routes
//!
//! Signup, login, and logout. Signup and login are public; logout sits
//! behind the bearer-token guard.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{middleware, Extension, Json, Router};
use serde::Serialize;
use serde_json::Value;

use super::extract::required_str;
use super::guard::{require_account, Identity};
use super::state::SharedState;
use crate::account::{AccountError, AccountInfo};
use crate::store::RecordStore;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct SignupResponse {
    message: String,
    user: AccountInfo,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    message: String,
    authorization: String,
    user: AccountInfo,
}

// ============================================================================
// Routes
// ============================================================================

/// Build the auth router.
pub fn auth_routes<S: RecordStore>(state: SharedState<S>) -> Router {
    let public = Router::new()
        .route("/signup", post(signup::<S>))
        .route("/login", post(login::<S>));

    let protected = Router::new()
        .route("/logout", post(logout::<S>))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.signer),
            require_account,
        ));

    public.merge(protected).with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

async fn signup<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Json(body): Json<Value>,
) -> Result<Response, AccountError> {
    let user_name = required_str(&body, "userName").ok_or(AccountError::MissingFields)?;
    let email = required_str(&body, "email").ok_or(AccountError::MissingFields)?;
    let password = required_str(&body, "password").ok_or(AccountError::MissingFields)?;

    let account = state.accounts.signup(user_name, email, password).await?;

    let response = SignupResponse {
        message: "User created successfully".to_string(),
        user: AccountInfo::from(&account),
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn login<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Json(body): Json<Value>,
) -> Result<Response, AccountError> {
    // A missing email cannot match an account, and a missing password
    // cannot match a stored hash.
    let email = required_str(&body, "email").ok_or(AccountError::UnknownAccount)?;
    let password = required_str(&body, "password").ok_or(AccountError::InvalidCredentials)?;

    let (account, token) = state.accounts.login(email, password).await?;

    let response = LoginResponse {
        message: "Login successful!".to_string(),
        authorization: token,
        user: AccountInfo::from(&account),
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

async fn logout<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Extension(identity): Extension<Identity>,
) -> Response {
    state.accounts.logout(identity.account_id);

    let body = serde_json::json!({ "message": "Logged out successfully!" });
    (StatusCode::OK, Json(body)).into_response()
}
