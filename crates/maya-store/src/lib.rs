//! # maya-store
//!
//! Local persistence for the two Mayavihin collections: analysis history and
//! the activity log.
//!
//! Each collection is one JSON array stored under a fixed key in a
//! [`KeyValueBackend`]. Writes replace the whole collection. Reads never
//! fail: absent or malformed content loads as an empty collection and the
//! problem is only logged.

mod backend;
mod error;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use error::StoreError;

use maya_core::entities::{AnalysisRecord, SystemLog};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The persisted collections and their storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    History,
    Logs,
}

impl Collection {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::History => "mayavihin_history",
            Self::Logs => "mayavihin_logs",
        }
    }
}

/// Collection-level access over a key-value backend.
#[derive(Debug)]
pub struct Storage<B> {
    backend: B,
}

impl<B: KeyValueBackend> Storage<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Load a collection, substituting an empty one when the stored value is
    /// absent, unreadable, or not a JSON array of `T`.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let key = collection.key();
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(key, %error, "failed to read collection; starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(key, %error, "stored collection is malformed; starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite a collection with `items`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the backend write fails.
    pub fn save<T: Serialize>(&self, collection: Collection, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(collection.key(), &raw)?;
        tracing::debug!(key = collection.key(), count = items.len(), "saved collection");
        Ok(())
    }

    pub fn load_history(&self) -> Vec<AnalysisRecord> {
        self.load(Collection::History)
    }

    pub fn load_logs(&self) -> Vec<SystemLog> {
        self.load(Collection::Logs)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn save_history(&self, history: &[AnalysisRecord]) -> Result<(), StoreError> {
        self.save(Collection::History, history)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn save_logs(&self, logs: &[SystemLog]) -> Result<(), StoreError> {
        self.save(Collection::Logs, logs)
    }
}
