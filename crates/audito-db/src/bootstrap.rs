//! Startup initialization for a data directory.
//!
//! Called once from `main` before the server accepts requests. Every step is
//! idempotent: running it against an already-initialized directory changes
//! nothing.

use audito_config::AdminConfig;
use audito_core::entities::{Audit, User, UserRole};
use audito_core::ids::{PREFIX_USER, generate_id};
use serde::Deserialize;

use crate::error::DatabaseError;
use crate::repos::user::{UsersDocument, hash_in_background};
use crate::service::AuditoService;
use crate::{AUDITS_LOG, LEGACY_AUDITS_FILE, USERS_FILE};

/// What `ensure_default_admin` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminBootstrap {
    /// The user store was empty; the default admin was created.
    Created,
    /// The first user had no password hash; the default password was set.
    PasswordFilled,
    /// Users already exist with passwords; nothing changed.
    Unchanged,
}

/// Ensure an administrator can log in to a fresh installation.
///
/// # Errors
///
/// Returns `DatabaseError` if the user store cannot be read or written.
pub async fn ensure_default_admin(
    svc: &AuditoService,
    admin: &AdminConfig,
) -> Result<AdminBootstrap, DatabaseError> {
    let _guard = svc.lock_writes().await;
    let mut doc: UsersDocument = svc.db().read_document(USERS_FILE)?;

    let outcome = match doc.users.first_mut() {
        None => {
            doc.users.push(User {
                id: generate_id(PREFIX_USER)?,
                name: admin.name.clone(),
                email: admin.email.clone(),
                password_hash: hash_in_background(admin.password.clone()).await?,
                role: UserRole::Admin,
            });
            AdminBootstrap::Created
        }
        Some(first) if first.password_hash.is_empty() => {
            first.password_hash = hash_in_background(admin.password.clone()).await?;
            AdminBootstrap::PasswordFilled
        }
        Some(_) => AdminBootstrap::Unchanged,
    };

    match outcome {
        AdminBootstrap::Created => {
            svc.db().write_document(USERS_FILE, &doc)?;
            tracing::warn!(
                email = %admin.email,
                "default admin user created; change its password before exposing the server"
            );
        }
        AdminBootstrap::PasswordFilled => {
            svc.db().write_document(USERS_FILE, &doc)?;
            tracing::warn!("first user had no password; default admin password assigned");
        }
        AdminBootstrap::Unchanged => {
            tracing::debug!(users = doc.users.len(), "admin bootstrap: nothing to do");
        }
    }
    Ok(outcome)
}

#[derive(Debug, Default, Deserialize)]
struct LegacyAuditsDocument {
    #[serde(default)]
    audits: Vec<Audit>,
}

/// Move audits from a whole-file `audits.json` into the append-only log.
///
/// Runs only while the log does not exist yet. The legacy file is left in
/// place. Returns the number of imported audits.
///
/// # Errors
///
/// Returns `DatabaseError` if the legacy file is unreadable or the log write fails.
pub async fn import_legacy_audits(svc: &AuditoService) -> Result<usize, DatabaseError> {
    let _guard = svc.lock_writes().await;
    if svc.db().exists(AUDITS_LOG) || !svc.db().exists(LEGACY_AUDITS_FILE) {
        return Ok(0);
    }

    let legacy: LegacyAuditsDocument = svc.db().read_document(LEGACY_AUDITS_FILE)?;
    // The legacy file keeps newest first; the log is oldest first.
    for audit in legacy.audits.iter().rev() {
        svc.db().append_line(AUDITS_LOG, audit)?;
    }
    tracing::info!(count = legacy.audits.len(), "imported legacy audits");
    Ok(legacy.audits.len())
}
