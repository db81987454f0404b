//! Audit repository.
//!
//! Audits are immutable: created once, appended to the log, read many times.
//! No update or delete exists.

use std::collections::HashSet;

use chrono::Utc;

use audito_core::entities::{Audit, NewAudit, Score};
use audito_core::errors::CoreError;
use audito_core::ids::{PREFIX_AUDIT, generate_id};

use crate::AUDITS_LOG;
use crate::error::DatabaseError;
use crate::service::{AuditoService, unused_id};

impl AuditoService {
    /// Create an audit owned by `owner_id`.
    ///
    /// Assigns `id` and `createdAt`; `createdAtAudit` defaults to the
    /// submission time. The submitted score is stored exactly as given; a
    /// score that disagrees with the checklist is only logged.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the log cannot be read, no unused ID can be
    /// drawn, or the append fails.
    pub async fn create_audit(
        &self,
        owner_id: &str,
        new: NewAudit,
    ) -> Result<Audit, DatabaseError> {
        self.insert_audit(owner_id, new, || generate_id(PREFIX_AUDIT))
            .await
    }

    pub(crate) async fn insert_audit(
        &self,
        owner_id: &str,
        new: NewAudit,
        next_id: impl FnMut() -> Result<String, CoreError>,
    ) -> Result<Audit, DatabaseError> {
        let _guard = self.lock_writes().await;
        let existing: HashSet<String> = self
            .db()
            .read_lines::<Audit>(AUDITS_LOG)?
            .into_iter()
            .map(|audit| audit.id)
            .collect();
        let id = unused_id(next_id, |id| existing.contains(id))?;
        let now = Utc::now();

        if let Some(score) = &new.score {
            if !score.agrees_with(&new.checklist) {
                let computed = Score::from_checklist(&new.checklist);
                tracing::warn!(
                    audit_id = %id,
                    submitted_percent = score.percent,
                    computed_percent = computed.percent,
                    "submitted score disagrees with checklist; storing as submitted"
                );
            }
        }

        let audit = Audit {
            id,
            name: new.name,
            standard: new.standard,
            checklist: new.checklist,
            score: new.score,
            notes: new.notes.unwrap_or_default(),
            auditor: new.auditor.unwrap_or_default(),
            created_at_audit: new
                .created_at_audit
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| now.to_rfc3339()),
            created_at: now,
            created_by: owner_id.to_string(),
        };

        self.db().append_line(AUDITS_LOG, &audit)?;
        tracing::info!(audit_id = %audit.id, owner = owner_id, "audit created");
        Ok(audit)
    }

    /// List audits created by `owner_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the log cannot be read.
    pub async fn list_audits_by_owner(&self, owner_id: &str) -> Result<Vec<Audit>, DatabaseError> {
        let mut audits: Vec<Audit> = self
            .db()
            .read_lines::<Audit>(AUDITS_LOG)?
            .into_iter()
            .filter(|audit| audit.created_by == owner_id)
            .collect();
        // Log order is oldest first; reverse so equal timestamps keep newest first.
        audits.reverse();
        audits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(audits)
    }

    /// Fetch an audit by ID, regardless of owner.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the log cannot be read.
    pub async fn get_audit(&self, id: &str) -> Result<Option<Audit>, DatabaseError> {
        Ok(self
            .db()
            .read_lines::<Audit>(AUDITS_LOG)?
            .into_iter()
            .find(|audit| audit.id == id))
    }
}

#[cfg(test)]
mod tests {
    use audito_core::entities::ChecklistResult;
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::test_service;

    use super::*;

    fn checklist() -> Vec<ChecklistResult> {
        vec![
            ChecklistResult {
                id: "9001-1".into(),
                text: "Existe un proceso documentado".into(),
                weight: 3.0,
                passed: true,
            },
            ChecklistResult {
                id: "9001-2".into(),
                text: "Se realizan revisiones".into(),
                weight: 2.0,
                passed: false,
            },
        ]
    }

    fn new_audit(name: &str) -> NewAudit {
        NewAudit {
            name: name.into(),
            standard: "ISO 9001".into(),
            checklist: checklist(),
            score: Some(Score::from_checklist(&checklist())),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_server_fields() {
        let (_dir, svc) = test_service();
        let audit = svc.create_audit("usr-a", new_audit("Q1")).await.unwrap();

        assert!(audit.id.starts_with("aud-"));
        assert_eq!(audit.created_by, "usr-a");
        assert_eq!(audit.notes, "");
        assert_eq!(audit.auditor, "");
        assert_eq!(audit.created_at_audit, audit.created_at.to_rfc3339());
    }

    #[tokio::test]
    async fn create_keeps_caller_audit_timestamp() {
        let (_dir, svc) = test_service();
        let new = NewAudit {
            created_at_audit: Some("2026-01-15T10:00:00Z".into()),
            ..new_audit("Q1")
        };
        let audit = svc.create_audit("usr-a", new).await.unwrap();
        assert_eq!(audit.created_at_audit, "2026-01-15T10:00:00Z");
    }

    #[tokio::test]
    async fn stored_score_is_never_recomputed() {
        let (_dir, svc) = test_service();
        let inflated = Score {
            total_achieved: 99.0,
            total_possible: 5.0,
            percent: 1980.0,
        };
        let new = NewAudit {
            score: Some(inflated),
            ..new_audit("Inflated")
        };
        let created = svc.create_audit("usr-a", new).await.unwrap();
        let stored = svc.get_audit(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.score, Some(inflated));
    }

    #[tokio::test]
    async fn get_roundtrips_created_audit() {
        let (_dir, svc) = test_service();
        let created = svc.create_audit("usr-a", new_audit("Q1")).await.unwrap();
        let fetched = svc.get_audit(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn taken_id_is_redrawn() {
        let (_dir, svc) = test_service();
        let planted = svc
            .insert_audit("usr-a", new_audit("Planted"), || Ok("aud-00000001".into()))
            .await
            .unwrap();

        let mut draws = vec!["aud-00000002".to_string(), "aud-00000001".to_string()];
        let created = svc
            .insert_audit("usr-b", new_audit("Second"), || {
                draws.pop().ok_or_else(|| CoreError::Random("exhausted".into()))
            })
            .await
            .unwrap();

        assert_eq!(created.id, "aud-00000002");
        let fetched = svc.get_audit(&planted.id).await.unwrap().unwrap();
        assert_eq!(fetched.created_by, "usr-a");
        assert_eq!(svc.list_audits_by_owner("usr-b").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_unknown_is_none() {
        let (_dir, svc) = test_service();
        assert_eq!(svc.get_audit("aud-00000000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_ignores_owner() {
        let (_dir, svc) = test_service();
        let created = svc.create_audit("usr-a", new_audit("Q1")).await.unwrap();
        assert!(svc.get_audit(&created.id).await.unwrap().is_some());
        assert!(svc.list_audits_by_owner("usr-b").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_filters_by_owner_newest_first() {
        let (_dir, svc) = test_service();
        let first = svc.create_audit("usr-a", new_audit("first")).await.unwrap();
        svc.create_audit("usr-b", new_audit("other")).await.unwrap();
        let second = svc.create_audit("usr-a", new_audit("second")).await.unwrap();

        let listed = svc.list_audits_by_owner("usr-a").await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, [second.id.as_str(), first.id.as_str()]);
    }

    #[tokio::test]
    async fn audits_survive_reopen() {
        let (dir, svc) = test_service();
        let created = svc.create_audit("usr-a", new_audit("Q1")).await.unwrap();
        drop(svc);

        let reopened = AuditoService::open(dir.path().join("data")).unwrap();
        assert_eq!(reopened.get_audit(&created.id).await.unwrap(), Some(created));
    }
}
