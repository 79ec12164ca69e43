//! # HTTP Module
//!
//! The JSON-over-HTTP surface: route groups, the bearer-token guard,
//! shared application state, and server assembly.

pub mod auth_routes;
pub mod book_routes;
pub mod config;
pub mod extract;
pub mod guard;
pub mod response;
pub mod review_routes;
pub mod server;
pub mod state;

pub use config::HttpConfig;
pub use guard::Identity;
pub use server::HttpServer;
pub use state::{AppState, SharedState};
