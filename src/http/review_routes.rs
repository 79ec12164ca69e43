//! # Review Routes
//!
//! Listing is open to any signed-in account; adding stamps the caller
//! as author, and deleting is limited to the author. Reviews are
//! addressed by query string rather than path segments.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use serde::Serialize;
use serde_json::Value;

use super::extract::{parse_record_id, required_i64, required_str};
use super::guard::{require_account, Identity};
use super::state::SharedState;
use crate::review::{Review, ReviewError};
use crate::store::RecordStore;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ReviewResponse {
    message: String,
    review: Review,
}

// ============================================================================
// Routes
// ============================================================================

/// Build the review router.
pub fn review_routes<S: RecordStore>(state: SharedState<S>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_reviews::<S>)
                .post(add_review::<S>)
                .delete(delete_review::<S>),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.signer),
            require_account,
        ))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

async fn list_reviews<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ReviewError> {
    let raw = params
        .get("bookId")
        .filter(|value| !value.is_empty())
        .ok_or(ReviewError::MissingBookId)?;
    let Some(book_id) = parse_record_id(raw) else {
        return Err(ReviewError::NoneFound);
    };

    let reviews = state.reviews.list(book_id).await?;
    if reviews.is_empty() {
        return Err(ReviewError::NoneFound);
    }

    Ok((StatusCode::OK, Json(reviews)).into_response())
}

async fn add_review<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Result<Response, ReviewError> {
    let raw = params
        .get("bookId")
        .filter(|value| !value.is_empty())
        .ok_or(ReviewError::MissingFields)?;
    let text = required_str(&body, "review").ok_or(ReviewError::MissingFields)?;
    let rating = required_i64(&body, "rating").ok_or(ReviewError::MissingFields)?;
    let book_id = parse_record_id(raw).ok_or(ReviewError::BookMissing)?;

    let review = state
        .reviews
        .add(&identity.scope(), book_id, text.to_string(), rating)
        .await?;

    let response = ReviewResponse {
        message: "Review added successfully".to_string(),
        review,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn delete_review<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ReviewError> {
    let raw = params
        .get("reviewId")
        .filter(|value| !value.is_empty())
        .ok_or(ReviewError::MissingReviewId)?;
    let Some(review_id) = parse_record_id(raw) else {
        return Err(ReviewError::NotFound);
    };

    let review = state.reviews.remove(&identity.scope(), review_id).await?;

    let response = ReviewResponse {
        message: "Review deleted successfully!".to_string(),
        review,
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}
