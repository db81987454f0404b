use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One evaluated checklist item as submitted by the auditor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChecklistResult {
    pub id: String,
    pub text: String,
    pub weight: f64,
    #[serde(default)]
    pub passed: bool,
}

/// Aggregate score of an audit. Stored exactly as the client computed it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default)]
    pub total_achieved: f64,
    #[serde(default)]
    pub total_possible: f64,
    #[serde(default)]
    pub percent: f64,
}

/// A completed, immutable compliance audit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub checklist: Vec<ChecklistResult>,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub auditor: String,
    /// When the audit was performed, as supplied by the client.
    #[serde(default)]
    pub created_at_audit: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// Audit submission payload. The server fills in id, owner and timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAudit {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub checklist: Vec<ChecklistResult>,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub auditor: Option<String>,
    #[serde(default)]
    pub created_at_audit: Option<String>,
}
