//! # Password Hashing
//!
//! Argon2id password hashing and verification. Passwords are only ever
//! stored as PHC-string hashes; the salt is drawn from the OS RNG and
//! travels inside the hash string, so verification needs no extra state.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::errors::{AuthError, AuthResult};

/// Hash a password using Argon2id.
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::HashingFailed)
}

/// Verify a password against its stored hash.
///
/// A mismatch is `Ok(false)`; a stored hash that does not parse is an
/// error. The comparison itself is constant-time inside the argon2 crate.
pub fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::VerificationFailed)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_only_the_original_password() {
        let hash = hash_password("shelf-space").unwrap();

        // Stored form is a PHC string, never the password itself.
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("shelf-space", &hash).unwrap());
        assert!(!verify_password("shelf-spaces", &hash).unwrap());
    }

    #[test]
    fn test_repeat_hashes_differ_by_salt() {
        let first = hash_password("reading-list").unwrap();
        let second = hash_password("reading-list").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("reading-list", &first).unwrap());
        assert!(verify_password("reading-list", &second).unwrap());
    }

    #[test]
    fn test_garbage_stored_hash_is_an_error() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::VerificationFailed)));
    }
}
