//! # Book Routes
//!
//! Owner-scoped book CRUD. Every route sits behind the bearer-token
//! guard, and every store call carries the caller's scope, so one
//! account can never read or touch another account's books.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use serde::Serialize;
use serde_json::Value;

use super::extract::{optional_str, parse_record_id, required_str};
use super::guard::{require_account, Identity};
use super::state::SharedState;
use crate::catalog::{Book, BookChanges, BookQuery, CatalogError};
use crate::store::RecordStore;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct BookResponse {
    message: String,
    book: Book,
}

// ============================================================================
// Routes
// ============================================================================

/// Build the book router.
pub fn book_routes<S: RecordStore>(state: SharedState<S>) -> Router {
    Router::new()
        .route("/", get(list_books::<S>).post(create_book::<S>))
        .route(
            "/:id",
            get(get_book::<S>).put(update_book::<S>).delete(delete_book::<S>),
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

async fn list_books<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<BookQuery>,
) -> Result<Response, CatalogError> {
    let books = state.catalog.list(&identity.scope(), query).await?;
    if books.is_empty() {
        return Err(CatalogError::NoneFound);
    }

    Ok((StatusCode::OK, Json(books)).into_response())
}

async fn create_book<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<Value>,
) -> Result<Response, CatalogError> {
    let title = required_str(&body, "title").ok_or(CatalogError::MissingFields)?;
    let author = required_str(&body, "author").ok_or(CatalogError::MissingFields)?;
    let genre = required_str(&body, "genre").ok_or(CatalogError::MissingFields)?;

    let book = state
        .catalog
        .add(
            &identity.scope(),
            title.to_string(),
            author.to_string(),
            genre.to_string(),
        )
        .await?;

    let response = BookResponse {
        message: "Book added successfully".to_string(),
        book,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn get_book<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    let id = parse_record_id(&id).ok_or(CatalogError::NotFound)?;
    let book = state.catalog.fetch(&identity.scope(), id).await?;

    Ok((StatusCode::OK, Json(book)).into_response())
}

async fn update_book<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, CatalogError> {
    let id = parse_record_id(&id).ok_or(CatalogError::NotFound)?;
    let changes = BookChanges {
        title: optional_str(&body, "title"),
        author: optional_str(&body, "author"),
        genre: optional_str(&body, "genre"),
    };

    let book = state.catalog.update(&identity.scope(), id, changes).await?;

    let response = BookResponse {
        message: "Book updated successfully!".to_string(),
        book,
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

async fn delete_book<S: RecordStore>(
    State(state): State<SharedState<S>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    let id = parse_record_id(&id).ok_or(CatalogError::NotFound)?;
    let book = state.catalog.remove(&identity.scope(), id).await?;

    let response = BookResponse {
        message: "Book deleted successfully!".to_string(),
        book,
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}
