//! Request handlers, one module per resource.

pub mod audits;
pub mod auth;
pub mod checklists;
pub mod health;
pub mod reports;
