//! # Account Module
//!
//! Account records and the signup/login/logout flows.

pub mod errors;
pub mod model;
pub mod service;

pub use errors::{AccountError, AccountResult};
pub use model::{Account, AccountField, AccountInfo};
pub use service::AccountService;
