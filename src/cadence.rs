// filepath: src/cadence.rs
//! How often the face is redrawn
//!
//! The host re-arms its timer after each redraw with the delay to the next
//! boundary, so ticks stay aligned to the wall clock instead of drifting.

use std::time::Duration;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedrawCadence {
    /// Redraw when the minute changes; seconds show the value at that instant
    #[default]
    Minute,
    /// Redraw every second for a live seconds readout
    Second,
}

impl RedrawCadence {
    /// Time from `now` until the next boundary. Never zero.
    pub fn delay_until_next<T: Timelike>(&self, now: &T) -> Duration {
        // nanosecond() exceeds 1e9 during a leap second
        let nanos = u64::from(now.nanosecond().min(999_999_999));
        let into_period = match self {
            RedrawCadence::Minute => u64::from(now.second().min(59)) * 1_000_000_000 + nanos,
            RedrawCadence::Second => nanos,
        };
        Duration::from_nanos(self.period_nanos() - into_period)
    }

    fn period_nanos(&self) -> u64 {
        match self {
            RedrawCadence::Minute => 60_000_000_000,
            RedrawCadence::Second => 1_000_000_000,
        }
    }
}
