//! Cross-cutting error types for Mayavihin.
//!
//! Domain-specific errors (`StoreError`, `AnalysisError`, `ConfigError`) live
//! in their respective crates and converge in `maya-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Mayavihin crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
