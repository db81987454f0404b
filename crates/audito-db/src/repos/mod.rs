//! Repository modules implementing store operations for Audito entities.
//!
//! Each module adds methods to `AuditoService` via `impl AuditoService` blocks.

pub mod audit;
pub mod checklist;
pub mod user;
