//! Entity structs for all Audito domain objects.
//!
//! All structs serialize with camelCase field names, matching the JSON the
//! HTTP API and the data files use, and derive `JsonSchema` for schema checks.

mod audit;
mod checklist;
mod user;

pub use audit::{Audit, ChecklistResult, NewAudit, Score};
pub use checklist::{ChecklistItem, ChecklistTemplate};
pub use user::{PublicUser, User, UserRole};
