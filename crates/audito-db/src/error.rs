//! Store error types for audito-db.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Filesystem read/write failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file exists but does not contain the expected JSON document.
    #[error("Corrupt data file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// A uniqueness rule was violated (e.g. duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Every freshly drawn ID was already in use.
    #[error("No unused ID after {0} attempts")]
    IdExhausted(usize),

    /// Input rejected before touching storage.
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// A blocking worker (password hashing) panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Background(String),

    /// Error bubbled up from a core helper (ID generation).
    #[error(transparent)]
    Core(#[from] audito_core::errors::CoreError),

    /// Error bubbled up from password hashing.
    #[error(transparent)]
    Auth(#[from] audito_auth::AuthError),
}

impl DatabaseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
