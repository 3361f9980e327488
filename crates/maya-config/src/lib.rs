//! # maya-config
//!
//! Layered configuration loading for Mayavihin using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MAYAVIHIN_*` prefix, `__` as separator)
//! 2. External overrides (conventional `GEMINI_API_KEY` / `API_KEY`)
//! 3. Project-level `.mayavihin/config.toml`
//! 4. User-level `~/.config/mayavihin/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MAYAVIHIN_GEMINI__API_KEY` -> `gemini.api_key`,
//! `MAYAVIHIN_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use maya_config::MayaConfig;
//!
//! let config = MayaConfig::load().expect("config");
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod gemini;
mod general;
mod storage;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for all configuration keys.
pub const ENV_PREFIX: &str = "MAYAVIHIN_";

/// Conventional credential variables accepted in place of
/// `MAYAVIHIN_GEMINI__API_KEY`, in priority order.
const CONVENTIONAL_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MayaConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MayaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does not read `.env`; the binary loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with externally supplied `MAYAVIHIN_*` overrides.
    ///
    /// Overrides sit below the process environment, so an explicitly set
    /// `MAYAVIHIN_*` variable still wins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        Self::figment_with_overrides(overrides)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_overrides(&[])
    }

    /// Build the figment provider chain with an extra override layer placed
    /// just below the process environment.
    #[must_use]
    pub fn figment_with_overrides(overrides: &[(String, String)]) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mayavihin/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: External overrides
        for (key, value) in overrides {
            if let Some(path) = env_key_to_path(key) {
                figment = figment.merge(Serialized::default(&path, value));
            }
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mayavihin").join("config.toml"))
    }
}

/// Translate conventional credential variables into `MAYAVIHIN_*` overrides.
///
/// The first non-empty variable from `GEMINI_API_KEY`, `API_KEY` becomes
/// `MAYAVIHIN_GEMINI__API_KEY`.
pub fn conventional_env_overrides<I>(env: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env = env
        .into_iter()
        .filter(|(key, value)| {
            CONVENTIONAL_KEY_VARS.contains(&key.as_str()) && !value.trim().is_empty()
        })
        .collect::<Vec<_>>();

    CONVENTIONAL_KEY_VARS
        .iter()
        .find_map(|wanted| env.iter().find(|(key, _)| key == wanted))
        .map(|(_, value)| vec![(format!("{ENV_PREFIX}GEMINI__API_KEY"), value.clone())])
        .unwrap_or_default()
}

/// `MAYAVIHIN_GEMINI__API_KEY` -> `gemini.api_key`
fn env_key_to_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = MayaConfig::default();
        assert!(!config.gemini.is_configured());
        assert_eq!(config.general.default_limit, 20);
        assert!(config.storage.data_dir.is_empty());
    }

    #[test]
    fn env_key_maps_to_nested_path() {
        assert_eq!(
            env_key_to_path("MAYAVIHIN_GEMINI__API_KEY").as_deref(),
            Some("gemini.api_key")
        );
        assert_eq!(env_key_to_path("OTHER_KEY"), None);
        assert_eq!(env_key_to_path("MAYAVIHIN_"), None);
    }

    #[test]
    fn conventional_overrides_prefer_gemini_key() {
        let env = vec![
            ("API_KEY".to_string(), "generic".to_string()),
            ("GEMINI_API_KEY".to_string(), "specific".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
        ];
        let overrides = conventional_env_overrides(env);
        assert_eq!(
            overrides,
            vec![(
                "MAYAVIHIN_GEMINI__API_KEY".to_string(),
                "specific".to_string()
            )]
        );
    }

    #[test]
    fn conventional_overrides_skip_empty_values() {
        let env = vec![
            ("GEMINI_API_KEY".to_string(), String::new()),
            ("API_KEY".to_string(), "generic".to_string()),
        ];
        let overrides = conventional_env_overrides(env);
        assert_eq!(overrides[0].1, "generic");
        assert!(conventional_env_overrides(Vec::new()).is_empty());
    }
}
