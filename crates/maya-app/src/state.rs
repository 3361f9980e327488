//! The state coordinator.

use maya_core::entities::{AnalysisRecord, LOG_CAPACITY, SystemLog};
use maya_core::enums::{LogAction, LogStatus};
use maya_core::errors::CoreError;
use maya_store::{KeyValueBackend, Storage};

/// What the results area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// No analysis open.
    #[default]
    Entry,
    /// The record with this id is open.
    Results(String),
}

/// History, activity log and active view, persisted on every change.
///
/// History is newest first and unbounded. The log is newest first and never
/// holds more than [`LOG_CAPACITY`] entries. Storage write failures are
/// logged and otherwise ignored: in-memory state stays authoritative for the
/// rest of the session.
#[derive(Debug)]
pub struct AppState<B> {
    storage: Storage<B>,
    history: Vec<AnalysisRecord>,
    logs: Vec<SystemLog>,
    view: ActiveView,
}

impl<B: KeyValueBackend> AppState<B> {
    /// Load both collections. Unreadable collections start empty.
    pub fn load(storage: Storage<B>) -> Self {
        let history = storage.load_history();
        let mut logs = storage.load_logs();
        logs.truncate(LOG_CAPACITY);
        tracing::debug!(
            records = history.len(),
            logs = logs.len(),
            "loaded application state"
        );
        Self {
            storage,
            history,
            logs,
            view: ActiveView::Entry,
        }
    }

    pub fn history(&self) -> &[AnalysisRecord] {
        &self.history
    }

    pub fn logs(&self) -> &[SystemLog] {
        &self.logs
    }

    pub const fn active_view(&self) -> &ActiveView {
        &self.view
    }

    pub const fn storage(&self) -> &Storage<B> {
        &self.storage
    }

    /// The record shown by the results view, if one is open.
    pub fn active_record(&self) -> Option<&AnalysisRecord> {
        match &self.view {
            ActiveView::Entry => None,
            ActiveView::Results(id) => self.find_record(id),
        }
    }

    /// Exact id lookup.
    pub fn find_record(&self, id: &str) -> Option<&AnalysisRecord> {
        self.history.iter().find(|r| r.id == id)
    }

    /// Look a record up by full id or by a unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when nothing matches and
    /// [`CoreError::Validation`] when a prefix matches more than one record.
    pub fn resolve_record(&self, id_or_prefix: &str) -> Result<&AnalysisRecord, CoreError> {
        let needle = id_or_prefix.trim();
        if let Some(record) = self.find_record(needle) {
            return Ok(record);
        }

        let mut matches = self
            .history
            .iter()
            .filter(|r| !needle.is_empty() && r.id.starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record),
            (Some(_), Some(_)) => Err(CoreError::Validation(format!(
                "id prefix '{needle}' matches more than one record"
            ))),
            (None, _) => Err(CoreError::NotFound {
                entity_type: "analysis record".into(),
                id: needle.to_string(),
            }),
        }
    }

    /// Prepend a finished analysis and open it.
    ///
    /// No de-duplication and no cap: every completed analysis is kept.
    pub fn record_completed_analysis(&mut self, record: AnalysisRecord) {
        self.view = ActiveView::Results(record.id.clone());
        self.history.insert(0, record);
        self.persist_history();
    }

    /// Remove the record with `id` and log the deletion.
    ///
    /// Deleting an unknown id leaves history untouched but is still logged.
    /// If the deleted record was open, the view returns to the entry view.
    pub fn delete_record(&mut self, id: &str) -> Option<AnalysisRecord> {
        let removed = self
            .history
            .iter()
            .position(|r| r.id == id)
            .map(|index| self.history.remove(index));

        if removed.is_some() {
            self.persist_history();
            if matches!(&self.view, ActiveView::Results(open) if open == id) {
                self.view = ActiveView::Entry;
            }
        }

        self.append_log(
            LogAction::Delete,
            LogStatus::Success,
            format!("Deleted analysis record {id}"),
            removed.as_ref().map(|r| r.file_name.clone()),
        );
        removed
    }

    /// Prepend a log entry, evicting the oldest beyond [`LOG_CAPACITY`].
    pub fn append_log(
        &mut self,
        action: LogAction,
        status: LogStatus,
        message: impl Into<String>,
        file_name: Option<String>,
    ) {
        let entry = SystemLog::new(action, status, message, file_name);
        tracing::debug!(action = %entry.action_type, status = %entry.status, message = %entry.message, "activity");
        self.logs.insert(0, entry);
        self.logs.truncate(LOG_CAPACITY);
        self.persist_logs();
    }

    /// Leave the results view.
    pub fn close_results(&mut self) {
        self.view = ActiveView::Entry;
    }

    fn persist_history(&self) {
        if let Err(error) = self.storage.save_history(&self.history) {
            tracing::warn!(%error, "failed to persist analysis history");
        }
    }

    fn persist_logs(&self) {
        if let Err(error) = self.storage.save_logs(&self.logs) {
            tracing::warn!(%error, "failed to persist activity log");
        }
    }
}
