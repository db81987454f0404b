use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `audito-auth` from a verified bearer token and consumed by the
/// HTTP layer to scope listings and stamp `createdBy`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthIdentity {
    /// User ID (from the JWT `sub` claim).
    pub user_id: String,
}
