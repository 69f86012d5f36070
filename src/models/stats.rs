// SPDX-License-Identifier: MIT

//! Derived streak statistics for a user.
//!
//! A snapshot is a pure function of the user's daily records: it is
//! recomputed in full on every write, never incrementally patched, so
//! out-of-order or retroactively corrected writes cannot leave it stale.

use serde::{Deserialize, Serialize};

/// Fully recomputed statistics for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Consecutive completed days ending at "today" (or yesterday, when
    /// today is not yet logged)
    pub current_streak: u32,
    /// Maximum run of consecutive completed days across all history
    pub longest_streak: u32,
    /// Count of records marked completed
    pub total_active_days: u32,
    /// Sum of points over completed records
    pub total_points: u32,
}
