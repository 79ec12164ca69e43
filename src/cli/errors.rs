//! CLI-specific error types
//!
//! Every CLI error is fatal: `main` prints it and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be read from the environment
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The document store refused the connection or a query
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Runtime or listener failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
