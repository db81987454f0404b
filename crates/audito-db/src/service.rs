//! Service layer serializing store mutations.
//!
//! `AuditoService` wraps `FileDb` (raw file access) with an async write lock.
//! Repo methods are implemented as `impl AuditoService` blocks in `repos/`.

use std::path::PathBuf;

use audito_core::errors::CoreError;
use tokio::sync::{Mutex, MutexGuard};

use crate::FileDb;
use crate::error::DatabaseError;

/// Draws before giving up on finding an unused ID.
pub(crate) const MAX_ID_ATTEMPTS: usize = 16;

/// The record store used by the HTTP layer.
///
/// Every mutation follows this protocol:
/// 1. Acquire the write lock
/// 2. Re-read the current file state
/// 3. Validate (unused ID, unique email)
/// 4. Persist atomically (whole-document rename or single-line append)
///
/// Reads take no lock: documents are replaced by rename and the audit log is
/// append-only.
#[derive(Debug)]
pub struct AuditoService {
    db: FileDb,
    write_lock: Mutex<()>,
}

impl AuditoService {
    /// Open a service over a data directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(FileDb::open(data_dir)?))
    }

    #[must_use]
    pub fn from_db(db: FileDb) -> Self {
        Self {
            db,
            write_lock: Mutex::new(()),
        }
    }

    /// Access the underlying file store.
    #[must_use]
    pub const fn db(&self) -> &FileDb {
        &self.db
    }

    pub(crate) async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

/// Draw IDs from `next_id` until one is not `taken`. Call with the write lock
/// held and `taken` built from a fresh read of the records.
pub(crate) fn unused_id(
    mut next_id: impl FnMut() -> Result<String, CoreError>,
    taken: impl Fn(&str) -> bool,
) -> Result<String, DatabaseError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = next_id()?;
        if !taken(&id) {
            return Ok(id);
        }
        tracing::warn!(id = %id, "generated ID already in use; drawing another");
    }
    Err(DatabaseError::IdExhausted(MAX_ID_ATTEMPTS))
}
