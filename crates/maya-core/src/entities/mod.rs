//! Entity structs for all Mayavihin domain objects.
//!
//! Field names serialize in camelCase so persisted collections keep the same
//! shape as the browser-local history they replace. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod log;
mod record;

use chrono::{DateTime, SubsecRound, Utc};

pub use log::{LOG_CAPACITY, SystemLog};
pub use record::{AgentResult, AnalysisRecord};

/// Current time truncated to the millisecond precision entities persist with.
#[must_use]
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
