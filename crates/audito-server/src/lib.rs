//! # audito-server
//!
//! HTTP surface of Audito, built on axum.
//!
//! - `GET  /health`
//! - `POST /api/auth/login`, `POST /api/auth/signup`
//! - `GET  /api/checklists/defaults`
//! - `GET  /api/audits`, `POST /api/audits` (bearer token)
//! - `GET  /api/reports/{id}/pdf` (bearer token)

pub mod app;
pub mod cors;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use app::{router, serve};
pub use error::ApiError;
pub use state::AppState;
