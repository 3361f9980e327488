//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Layers could not be merged or extracted into [`crate::MayaConfig`].
    #[error("failed to load mayavihin configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section lacks the fields it needs before it can be used.
    #[error("'{section}' is not configured")]
    NotConfigured { section: String },

    /// A field is present but unusable.
    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
