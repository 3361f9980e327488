//! Local persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted collections. Empty selects the
    /// platform data directory.
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Directory the collections are read from and written to.
    ///
    /// Falls back to `<data_dir>/mayavihin`, then to `.mayavihin` in the
    /// working directory when the platform has no data directory.
    #[must_use]
    pub fn resolve_data_dir(&self) -> PathBuf {
        if !self.data_dir.trim().is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir().map_or_else(|| PathBuf::from(".mayavihin"), |p| p.join("mayavihin"))
    }
}
