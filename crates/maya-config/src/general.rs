//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Advisory upload size shown to users, in megabytes.
const fn default_max_upload_mb() -> u64 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Files above this size trigger a warning. They are still sent.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_upload_mb: default_max_upload_mb(),
        }
    }
}

impl GeneralConfig {
    /// Whether a file of `size` bytes exceeds the advisory upload limit.
    #[must_use]
    pub const fn exceeds_upload_limit(&self, size: u64) -> bool {
        size > self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.max_upload_mb, 50);
    }

    #[test]
    fn upload_limit_is_inclusive() {
        let config = GeneralConfig::default();
        assert!(!config.exceeds_upload_limit(50 * 1024 * 1024));
        assert!(config.exceeds_upload_limit(50 * 1024 * 1024 + 1));
    }
}
