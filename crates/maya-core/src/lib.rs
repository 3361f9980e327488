//! # maya-core
//!
//! Core types, ID generation, and error types for Mayavihin.
//!
//! This crate provides the foundational types shared across all Mayavihin crates:
//! - Entity structs for analysis records, agent results, and activity log entries
//! - Verdict, media kind, and log enums with their persisted spellings
//! - The bounded [`enums::Confidence`] score
//! - Media classification and inline payload encoding
//! - ID generation helpers
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod media;
pub mod responses;
