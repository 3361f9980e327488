use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::timestamp_now;
use crate::enums::{LogAction, LogStatus};
use crate::ids::new_log_id;

/// Maximum number of activity log entries retained. Oldest are evicted first.
pub const LOG_CAPACITY: usize = 100;

/// One append-only activity log entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemLog {
    pub id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schemars(with = "i64")]
    pub timestamp: DateTime<Utc>,
    pub action_type: LogAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub status: LogStatus,
    pub message: String,
}

impl SystemLog {
    /// New entry stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(
        action_type: LogAction,
        status: LogStatus,
        message: impl Into<String>,
        file_name: Option<String>,
    ) -> Self {
        Self {
            id: new_log_id(),
            timestamp: timestamp_now(),
            action_type,
            file_name,
            status,
            message: message.into(),
        }
    }

    /// Whether `filter` occurs (case-insensitively) in the action type or message.
    #[must_use]
    pub fn matches(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.action_type.as_str().to_lowercase().contains(&needle)
            || self.message.to_lowercase().contains(&needle)
    }
}
