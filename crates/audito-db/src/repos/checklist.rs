//! Checklist template repository.
//!
//! Templates are read-only through the API. An empty store is seeded with the
//! built-in ISO defaults on first read.

use audito_core::defaults::default_checklists;
use audito_core::entities::ChecklistTemplate;
use serde::{Deserialize, Serialize};

use crate::CHECKLISTS_FILE;
use crate::error::DatabaseError;
use crate::service::AuditoService;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ChecklistsDocument {
    #[serde(default)]
    checklists: Vec<ChecklistTemplate>,
}

impl AuditoService {
    /// Stored checklist templates, seeding the defaults when none exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if `checklists.json` is unreadable or the seed
    /// cannot be written.
    pub async fn list_checklists(&self) -> Result<Vec<ChecklistTemplate>, DatabaseError> {
        let doc: ChecklistsDocument = self.db().read_document(CHECKLISTS_FILE)?;
        if !doc.checklists.is_empty() {
            return Ok(doc.checklists);
        }

        let _guard = self.lock_writes().await;
        // Another request may have seeded while we waited.
        let doc: ChecklistsDocument = self.db().read_document(CHECKLISTS_FILE)?;
        if !doc.checklists.is_empty() {
            return Ok(doc.checklists);
        }

        let seeded = ChecklistsDocument {
            checklists: default_checklists(),
        };
        self.db().write_document(CHECKLISTS_FILE, &seeded)?;
        tracing::info!(count = seeded.checklists.len(), "seeded default checklists");
        Ok(seeded.checklists)
    }
}
