//! # Session Tokens
//!
//! Signed, stateless, time-limited credentials identifying an account.
//! Tokens are HS256 JWTs carrying the account id, issue time, and expiry;
//! validation needs no store lookup. There is no refresh flow and no
//! revocation list: a token stays valid for its whole TTL regardless of
//! logout.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{AuthError, AuthResult};

/// Claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id)
    pub sub: String,

    /// Issued at (Unix epoch seconds)
    pub iat: i64,

    /// Expiry (Unix epoch seconds)
    pub exp: i64,
}

/// Signs and verifies session tokens.
///
/// The encoding and decoding keys are derived once from the configured
/// secret and reused for every request.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenSigner {
    /// Creates a signer from the shared secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Issues a token for `account_id` expiring after `ttl`.
    ///
    /// Signing failure is an explicit error; an empty token is never
    /// returned.
    pub fn issue(&self, account_id: Uuid, ttl: Duration) -> AuthResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenSigningFailed)
    }

    /// Verifies signature and expiry, returning the account id.
    pub fn verify(&self, token: &str) -> AuthResult<Uuid> {
        let validation = Validation::new(Algorithm::HS256);

        let data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::MalformedToken)
    }
}
