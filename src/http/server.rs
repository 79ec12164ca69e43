//! # HTTP Server
//!
//! Assembles the full router (health probe, API route groups, CORS,
//! request tracing) and serves it over TCP.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::auth_routes::auth_routes;
use super::book_routes::book_routes;
use super::config::HttpConfig;
use super::review_routes::review_routes;
use super::state::SharedState;
use crate::store::RecordStore;

/// HTTP server for the catalog API.
pub struct HttpServer {
    config: HttpConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server from config and application state.
    pub fn with_config<S: RecordStore>(config: HttpConfig, state: SharedState<S>) -> Self {
        let router = build_router(&config, state);
        Self { config, router }
    }

    /// Socket address the server will bind.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The assembled router, for driving requests without a listener.
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until the process stops.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let addr = listener.local_addr()?;
        info!(%addr, "http server listening");

        axum::serve(listener, self.router).await
    }
}

fn build_router<S: RecordStore>(config: &HttpConfig, state: SharedState<S>) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(health_routes())
        .nest("/api/auth", auth_routes(state.clone()))
        .nest("/api/books", book_routes(state.clone()))
        .nest("/api/reviews", review_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// ============================================================================
// Health
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenSigner;
    use crate::http::state::AppState;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn test_state() -> SharedState<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let signer = Arc::new(TokenSigner::new(b"server-test-secret"));
        AppState::shared(store, signer)
    }

    #[test]
    fn test_router_builds_with_default_config() {
        let server = HttpServer::with_config(HttpConfig::default(), test_state());
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let server = HttpServer::with_config(config, test_state());
        let _ = server.router();
    }
}
