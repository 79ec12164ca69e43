//! # Process Configuration
//!
//! Everything the server needs comes from environment variables, loaded
//! once at startup by `Config::from_env`. Missing required variables and
//! unparseable values are reported as errors and abort startup; nothing is
//! read lazily later.
//!
//! | Variable     | Required | Default     |
//! |--------------|----------|-------------|
//! | MONGO_URI    | yes      | —           |
//! | MONGO_DB     | no       | `bookshelf` |
//! | JWT_SECRET   | yes      | —           |
//! | HOST         | no       | `0.0.0.0`   |
//! | PORT         | no       | `5000`      |
//! | CORS_ORIGINS | no       | empty (permissive) |

use thiserror::Error;

use crate::http::HttpConfig;

/// Default database name
const DEFAULT_DATABASE: &str = "bookshelf";

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable is set but does not parse
    #[error("invalid value {1:?} for environment variable {0}")]
    InvalidVar(&'static str, String),
}

/// Document store connection settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Connection URI
    pub uri: String,
    /// Database name
    pub database: String,
}

/// Full process configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub http: HttpConfig,
    /// HS256 secret for session tokens
    pub token_secret: String,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// `from_env` goes through here; tests inject a map instead of
    /// mutating the process environment.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let uri = get("MONGO_URI").ok_or(ConfigError::MissingVar("MONGO_URI"))?;
        let database = get("MONGO_DB").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let token_secret = get("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;

        let mut http = HttpConfig::default();
        if let Some(host) = get("HOST") {
            http.host = host;
        }
        if let Some(raw) = get("PORT") {
            http.port = raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar("PORT", raw))?;
        }
        if let Some(raw) = get("CORS_ORIGINS") {
            http.cors_origins = parse_origins(&raw);
        }

        Ok(Self {
            store: StoreConfig { uri, database },
            http,
            token_secret,
        })
    }
}

/// Splits a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
