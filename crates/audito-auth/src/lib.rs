//! # audito-auth
//!
//! Authentication primitives for Audito.
//!
//! Provides salted, iterated SHA-256 password hashing with constant-time
//! verification, and HS256 JWT bearer tokens whose `sub` claim carries the
//! user ID. The HTTP layer treats [`JwtKeys::verify`] as an opaque verifier.

pub mod claims;
pub mod error;
pub mod password;
pub mod token;

pub use claims::AuditoClaims;
pub use error::AuthError;
pub use token::JwtKeys;
