//! # Auth Module
//!
//! Credential primitives: Argon2id password hashing and signed session
//! tokens. The account signup/login flows that use these live in
//! [`crate::account`]; the HTTP bearer-token guard lives in
//! [`crate::http::guard`].

pub mod crypto;
pub mod errors;
pub mod token;

pub use crypto::{hash_password, verify_password};
pub use errors::{AuthError, AuthResult};
pub use token::{Claims, TokenSigner};
