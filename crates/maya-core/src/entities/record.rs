use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Confidence, MediaType, Verdict};

/// One sub-judgment from a named analysis perspective.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AgentResult {
    /// Positional id within the owning record (`agent-<index>`).
    pub id: String,
    pub name: String,
    pub verdict: Verdict,
    pub confidence: Confidence,
    pub reasoning: String,
}

/// One completed analysis. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    /// Completion time, persisted as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schemars(with = "i64")]
    pub timestamp: DateTime<Utc>,
    pub file_name: String,
    /// Size of the submitted file in bytes.
    pub file_size: u64,
    pub file_type: MediaType,
    /// Data URL of the submitted payload. Only set for image analyses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub verdict: Verdict,
    pub overall_confidence: Confidence,
    pub agents: Vec<AgentResult>,
    pub explanation: String,
}

impl AnalysisRecord {
    /// Whether `filter` occurs (case-insensitively) in the file name or verdict.
    #[must_use]
    pub fn matches(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.file_name.to_lowercase().contains(&needle)
            || self.verdict.as_str().to_lowercase().contains(&needle)
    }
}
