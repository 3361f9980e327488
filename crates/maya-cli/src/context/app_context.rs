use std::path::PathBuf;

use maya_app::AppState;
use maya_config::MayaConfig;
use maya_store::{FileBackend, Storage};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: MayaConfig,
    pub state: AppState<FileBackend>,
}

impl AppContext {
    /// Resolve the data directory and load persisted state from it.
    ///
    /// `--data-dir` overrides `storage.data_dir`. Missing or unreadable
    /// collections load empty; the directory itself is created on first write.
    pub fn init(config: MayaConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir(&config, flags.data_dir.as_deref());
        if data_dir.exists() && !data_dir.is_dir() {
            anyhow::bail!(
                "data directory '{}' exists but is not a directory",
                data_dir.display()
            );
        }
        tracing::debug!(data_dir = %data_dir.display(), "using data directory");

        let state = AppState::load(Storage::new(FileBackend::new(&data_dir)));
        Ok(Self { config, state })
    }
}

fn resolve_data_dir(config: &MayaConfig, data_dir_override: Option<&str>) -> PathBuf {
    match data_dir_override.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => PathBuf::from(path),
        None => config.storage.resolve_data_dir(),
    }
}
