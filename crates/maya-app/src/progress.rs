//! Timer-driven progress indicator for a pending analysis.
//!
//! The analysis call reports nothing until it finishes, so progress is
//! simulated: it jumps once the payload is encoded, then creeps forward on a
//! fixed tick and parks below completion until the call returns.

use std::time::Duration;

/// Value shown as soon as an upload starts.
pub const STARTED: u8 = 10;
/// Value shown once the payload is encoded.
pub const ENCODED: u8 = 40;
/// Increment applied on every tick.
pub const STEP: u8 = 5;
/// Ceiling for ticking. Only [`SimulatedProgress::complete`] goes higher.
pub const CAP: u8 = 90;
/// Final value.
pub const DONE: u8 = 100;
/// Interval between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedProgress {
    value: u8,
}

impl Default for SimulatedProgress {
    fn default() -> Self {
        Self::started()
    }
}

impl SimulatedProgress {
    #[must_use]
    pub const fn started() -> Self {
        Self { value: STARTED }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.value >= DONE
    }

    pub fn mark_encoded(&mut self) -> u8 {
        self.value = self.value.max(ENCODED);
        self.value
    }

    /// Advance one tick, never past [`CAP`].
    pub fn tick(&mut self) -> u8 {
        if self.value < CAP {
            self.value = (self.value + STEP).min(CAP);
        }
        self.value
    }

    pub const fn complete(&mut self) -> u8 {
        self.value = DONE;
        self.value
    }
}
