use maya_config::MayaConfig;

/// Load `.env`, then the layered configuration.
///
/// A conventional `GEMINI_API_KEY` (or `API_KEY`) is folded in below the
/// `MAYAVIHIN_*` variables, so an explicit `MAYAVIHIN_GEMINI__API_KEY` wins.
pub fn load_config() -> anyhow::Result<MayaConfig> {
    if let Err(error) = dotenvy::dotenv()
        && !error.not_found()
    {
        tracing::warn!(%error, "failed to load .env file; continuing without it");
    }

    let env_overrides = maya_config::conventional_env_overrides(std::env::vars());
    MayaConfig::load_with_env_overrides(&env_overrides).map_err(anyhow::Error::from)
}
