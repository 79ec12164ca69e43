//! # Review Module
//!
//! Review records and the review list/add/delete flows.

pub mod errors;
pub mod model;
pub mod service;

pub use errors::{ReviewError, ReviewResult};
pub use model::{Review, ReviewField};
pub use service::ReviewService;
