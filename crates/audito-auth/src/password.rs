//! Password hashing.
//!
//! Hashes are bcrypt (`$2b$` for new hashes). Stores carried over from older
//! deployments hold `$2a$` hashes, which verify the same way.

use crate::error::AuthError;

/// Work factor for newly created hashes.
pub const DEFAULT_COST: u32 = 10;

/// Hash a password with [`DEFAULT_COST`].
///
/// # Errors
///
/// Returns `AuthError::Hashing` if bcrypt rejects the input or the random
/// source fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash_password_with_cost(password, DEFAULT_COST)
}

/// Hash a password with an explicit bcrypt cost (4..=31).
///
/// # Errors
///
/// Returns `AuthError::Hashing` if the cost is out of range or hashing fails.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Check `password` against a stored bcrypt hash.
///
/// Empty or malformed hashes never verify.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    if stored.is_empty() {
        return false;
    }
    bcrypt::verify(password, stored).unwrap_or_else(|error| {
        tracing::debug!(%error, "stored password hash is not valid bcrypt");
        false
    })
}
