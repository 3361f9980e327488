//! # maya-app
//!
//! Application shell for Mayavihin.
//!
//! [`AppState`] owns the analysis history, the activity log and the active
//! view, and is the single write path for all of them: every mutation is
//! persisted through `maya-store` before it returns. The [`upload`] module
//! drives one analysis from raw bytes to a stored record, [`progress`]
//! provides the timer-driven progress indicator, and [`filter`] implements
//! the list views' text filters.

pub mod filter;
pub mod progress;
mod state;
pub mod upload;

pub use progress::SimulatedProgress;
pub use state::{ActiveView, AppState};
pub use upload::{UploadOutcome, run_upload};
