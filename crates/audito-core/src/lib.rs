//! # audito-core
//!
//! Core types, ID generation, and error types for Audito.
//!
//! This crate provides the foundational types shared across all Audito crates:
//! - Entity structs for audits, users, and checklist templates
//! - ID prefix constants and random ID generation
//! - Score computation helpers (used for consistency warnings only)
//! - Built-in ISO checklist templates
//! - Timestamp parsing shared by the store and the report renderer
//! - Cross-cutting error types

pub mod defaults;
pub mod entities;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod scoring;
pub mod time;
