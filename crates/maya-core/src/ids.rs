//! Identifier generation.
//!
//! Records and log entries carry random UUID v4 strings. Agent results are
//! identified by their position within a record (`agent-0`, `agent-1`, ...).

use uuid::Uuid;

/// Prefix for positional agent identifiers.
pub const AGENT_ID_PREFIX: &str = "agent";

/// Fresh identifier for an analysis record.
#[must_use]
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Fresh identifier for an activity log entry.
#[must_use]
pub fn new_log_id() -> String {
    Uuid::new_v4().to_string()
}

/// Positional identifier for the agent at `index` within one record.
#[must_use]
pub fn agent_id(index: usize) -> String {
    format!("{AGENT_ID_PREFIX}-{index}")
}

/// First eight characters of an identifier, for compact display.
#[must_use]
pub fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(idx, _)| &id[..idx])
}
