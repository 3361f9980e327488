//! CLI response types returned as JSON by `mayavihin` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnalysisRecord, SystemLog};

/// Response from `mayavihin history`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryListResponse {
    pub records: Vec<AnalysisRecord>,
    /// Number of records matching the filter before the limit was applied.
    pub total_matches: u32,
}

/// Response from `mayavihin logs`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LogListResponse {
    pub logs: Vec<SystemLog>,
    pub total_matches: u32,
}

/// Response from `mayavihin delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
    pub file_name: Option<String>,
}
