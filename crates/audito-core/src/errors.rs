//! Cross-cutting error types for Audito.
//!
//! Domain-specific errors (`DatabaseError`, `AuthError`, `RenderError`) live in
//! their own crates. They converge into `ApiError` in `audito-server`.

use thiserror::Error;

/// Errors raised by core helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Random source unavailable while generating an ID.
    #[error("Random source unavailable: {0}")]
    Random(String),
}
