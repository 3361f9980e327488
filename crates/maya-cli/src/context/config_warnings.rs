use maya_config::MayaConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &MayaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &MayaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() && has_env_prefix(&env_keys, "MAYAVIHIN_GEMINI") {
        warnings.push(
            "Gemini config appears default while MAYAVIHIN_GEMINI* env vars exist. Use double underscores (example: MAYAVIHIN_GEMINI__API_KEY)."
                .to_string(),
        );
    }

    if config.storage.data_dir.trim().is_empty() && has_env_prefix(&env_keys, "MAYAVIHIN_STORAGE")
    {
        warnings.push(
            "Storage config appears default while MAYAVIHIN_STORAGE* env vars exist. Use double underscores (example: MAYAVIHIN_STORAGE__DATA_DIR)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use maya_config::{GeminiConfig, MayaConfig, StorageConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_unconfigured_sections_with_env_prefixes() {
        let config = MayaConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("MAYAVIHIN_GEMINI_API_KEY".to_string(), "key".to_string()),
                ("MAYAVIHIN_STORAGE_DATA_DIR".to_string(), "/tmp".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("MAYAVIHIN_GEMINI__API_KEY"));
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = MayaConfig {
            gemini: GeminiConfig {
                api_key: "key".to_string(),
                ..Default::default()
            },
            storage: StorageConfig {
                data_dir: "/tmp/maya".to_string(),
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("MAYAVIHIN_GEMINI__API_KEY".to_string(), "key".to_string()),
                ("MAYAVIHIN_STORAGE__DATA_DIR".to_string(), "/tmp/maya".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_without_env_vars() {
        let warnings = collect_unconfigured_warnings(&MayaConfig::default(), Vec::new());
        assert!(warnings.is_empty());
    }
}
