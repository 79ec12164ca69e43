//! Catalog Flow Tests
//!
//! End-to-end book CRUD over the assembled router:
//! - Books are visible only to the account that created them
//! - Empty results and missed lookups collapse to 204 with no body
//! - Updates apply only provided, non-empty fields
//! - A path id that does not parse behaves as a miss, not an error

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf::auth::TokenSigner;
use bookshelf::http::{AppState, HttpConfig, HttpServer};
use bookshelf::store::MemoryStore;

const TEST_SECRET: &[u8] = b"catalog-flow-test-secret";

fn test_router() -> Router {
    let store = Arc::new(MemoryStore::new());
    let signer = Arc::new(TokenSigner::new(TEST_SECRET));
    HttpServer::with_config(HttpConfig::default(), AppState::shared(store, signer)).router()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn request(method: &str, uri: &str, token: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sign up a fresh account and return its bearer token.
async fn account(router: &Router, name: &str) -> String {
    let email = format!("{name}@example.com");
    let body = json!({ "userName": name, "email": email, "password": "reading-list" });
    let (status, _) = send(
        router,
        Request::builder()
            .method("POST")
            .uri("/api/auth/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let body = json!({ "email": email, "password": "reading-list" });
    let (status, body) = send(
        router,
        Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["authorization"].as_str().unwrap().to_string()
}

async fn create_book(router: &Router, token: &str, title: &str, author: &str, genre: &str) -> Value {
    let body = json!({ "title": title, "author": author, "genre": genre });
    let (status, body) = send(router, request("POST", "/api/books", token, Some(&body))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Book added successfully");
    body["book"].clone()
}

// =============================================================================
// Create / List
// =============================================================================

#[tokio::test]
async fn test_created_book_appears_in_list() {
    let router = test_router();
    let token = account(&router, "ada").await;

    let book = create_book(&router, &token, "Dune", "Frank Herbert", "SciFi").await;
    assert!(book["_id"].is_string());
    assert!(book["ownerAccountId"].is_string());

    let (status, body) = send(&router, request("GET", "/api/books", &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Dune");
}

#[tokio::test]
async fn test_book_payloads_carry_underscore_id() {
    let router = test_router();
    let token = account(&router, "ada").await;

    let book = create_book(&router, &token, "Dune", "Frank Herbert", "SciFi").await;

    // The identity field keeps its stored key on the wire; there is no
    // plain "id" alias.
    assert!(book["_id"].is_string());
    assert!(book["id"].is_null());
}

#[tokio::test]
async fn test_create_rejects_missing_fields() {
    let router = test_router();
    let token = account(&router, "ada").await;

    for body in [
        json!({ "author": "Frank Herbert", "genre": "SciFi" }),
        json!({ "title": "Dune", "genre": "SciFi" }),
        json!({ "title": "Dune", "author": "Frank Herbert" }),
        json!({ "title": "", "author": "Frank Herbert", "genre": "SciFi" }),
    ] {
        let (status, body) = send(&router, request("POST", "/api/books", &token, Some(&body))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Title, author, and genre are required.");
    }
}

#[tokio::test]
async fn test_empty_list_is_no_content() {
    let router = test_router();
    let token = account(&router, "ada").await;

    let (status, body) = send(&router, request("GET", "/api/books", &token, None)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_list_narrows_by_query_filters() {
    let router = test_router();
    let token = account(&router, "ada").await;

    create_book(&router, &token, "Dune", "Frank Herbert", "SciFi").await;
    create_book(&router, &token, "Emma", "Jane Austen", "Classic").await;

    let (status, body) = send(&router, request("GET", "/api/books?genre=SciFi", &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Dune");

    // A filter that matches nothing collapses to 204.
    let (status, _) = send(&router, request("GET", "/api/books?genre=Poetry", &token, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_never_shows_foreign_books() {
    let router = test_router();
    let ada = account(&router, "ada").await;
    let bob = account(&router, "bob").await;

    create_book(&router, &ada, "Dune", "Frank Herbert", "SciFi").await;

    let (status, _) = send(&router, request("GET", "/api/books", &bob, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// =============================================================================
// Fetch / Update / Delete
// =============================================================================

#[tokio::test]
async fn test_fetch_by_id() {
    let router = test_router();
    let token = account(&router, "ada").await;
    let book = create_book(&router, &token, "Dune", "Frank Herbert", "SciFi").await;
    let uri = format!("/api/books/{}", book["_id"].as_str().unwrap());

    let (status, body) = send(&router, request("GET", &uri, &token, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["_id"], book["_id"]);
}

#[tokio::test]
async fn test_fetch_foreign_book_is_no_content() {
    let router = test_router();
    let ada = account(&router, "ada").await;
    let bob = account(&router, "bob").await;
    let book = create_book(&router, &ada, "Dune", "Frank Herbert", "SciFi").await;
    let uri = format!("/api/books/{}", book["_id"].as_str().unwrap());

    let (status, body) = send(&router, request("GET", &uri, &bob, None)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_unparseable_id_behaves_as_miss() {
    let router = test_router();
    let token = account(&router, "ada").await;

    let (status, _) = send(&router, request("GET", "/api/books/not-a-uuid", &token, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &router,
        request("DELETE", "/api/books/not-a-uuid", &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_applies_partial_changes() {
    let router = test_router();
    let token = account(&router, "ada").await;
    let book = create_book(&router, &token, "Dune", "Frank Herbert", "SciFi").await;
    let uri = format!("/api/books/{}", book["_id"].as_str().unwrap());

    let changes = json!({ "title": "Dune Messiah", "author": "" });
    let (status, body) = send(&router, request("PUT", &uri, &token, Some(&changes))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book updated successfully!");
    assert_eq!(body["book"]["title"], "Dune Messiah");
    // Empty strings read as "leave unchanged".
    assert_eq!(body["book"]["author"], "Frank Herbert");
    assert_eq!(body["book"]["genre"], "SciFi");
}

#[tokio::test]
async fn test_update_with_empty_body_returns_book_unchanged() {
    let router = test_router();
    let token = account(&router, "ada").await;
    let book = create_book(&router, &token, "Dune", "Frank Herbert", "SciFi").await;
    let uri = format!("/api/books/{}", book["_id"].as_str().unwrap());

    let (status, body) = send(&router, request("PUT", &uri, &token, Some(&json!({})))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["book"], book);
}

#[tokio::test]
async fn test_update_foreign_book_is_no_content_and_harmless() {
    let router = test_router();
    let ada = account(&router, "ada").await;
    let bob = account(&router, "bob").await;
    let book = create_book(&router, &ada, "Dune", "Frank Herbert", "SciFi").await;
    let uri = format!("/api/books/{}", book["_id"].as_str().unwrap());

    let changes = json!({ "title": "Stolen" });
    let (status, _) = send(&router, request("PUT", &uri, &bob, Some(&changes))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&router, request("GET", &uri, &ada, None)).await;
    assert_eq!(body["title"], "Dune");
}

#[tokio::test]
async fn test_delete_returns_book_then_misses() {
    let router = test_router();
    let token = account(&router, "ada").await;
    let book = create_book(&router, &token, "Dune", "Frank Herbert", "SciFi").await;
    let uri = format!("/api/books/{}", book["_id"].as_str().unwrap());

    let (status, body) = send(&router, request("DELETE", &uri, &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book deleted successfully!");
    assert_eq!(body["book"]["_id"], book["_id"]);

    let (status, _) = send(&router, request("GET", &uri, &token, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_foreign_book_is_no_content() {
    let router = test_router();
    let ada = account(&router, "ada").await;
    let bob = account(&router, "bob").await;
    let book = create_book(&router, &ada, "Dune", "Frank Herbert", "SciFi").await;
    let uri = format!("/api/books/{}", book["_id"].as_str().unwrap());

    let (status, _) = send(&router, request("DELETE", &uri, &bob, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Still there for the owner.
    let (status, _) = send(&router, request("GET", &uri, &ada, None)).await;
    assert_eq!(status, StatusCode::OK);
}
