//! bookshelf - A small, self-hostable book & review catalog API
//!
//! Users sign up, log in, manage their own books, and post or delete
//! reviews on books. Everything speaks JSON over HTTP and persists to a
//! document store.

pub mod account;
pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod http;
pub mod review;
pub mod store;
