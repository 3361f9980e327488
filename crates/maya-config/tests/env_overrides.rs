use figment::Jail;
use maya_config::{MayaConfig, conventional_env_overrides};

#[test]
fn external_overrides_fill_config_values() {
    Jail::expect_with(|_jail| {
        let overrides = vec![(
            "MAYAVIHIN_GEMINI__API_KEY".to_string(),
            "key_from_external".to_string(),
        )];

        let config = MayaConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.gemini.api_key, "key_from_external");
        Ok(())
    });
}

#[test]
fn process_env_beats_external_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("MAYAVIHIN_GEMINI__API_KEY", "key_from_env");
        let overrides = vec![(
            "MAYAVIHIN_GEMINI__API_KEY".to_string(),
            "key_from_external".to_string(),
        )];

        let config = MayaConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.gemini.api_key, "key_from_env");
        Ok(())
    });
}

#[test]
fn conventional_key_reaches_gemini_section() {
    Jail::expect_with(|_jail| {
        let overrides = conventional_env_overrides(vec![(
            "GEMINI_API_KEY".to_string(),
            "AIza-conventional".to_string(),
        )]);

        let config = MayaConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.gemini.api_key, "AIza-conventional");
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn numeric_env_values_are_parsed() {
    Jail::expect_with(|jail| {
        jail.set_env("MAYAVIHIN_GEMINI__TIMEOUT_SECS", "45");
        jail.set_env("MAYAVIHIN_GENERAL__DEFAULT_LIMIT", "7");

        let config = MayaConfig::load().expect("config loads");
        assert_eq!(config.gemini.timeout_secs, 45);
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}
