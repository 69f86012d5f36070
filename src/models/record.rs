// SPDX-License-Identifier: MIT

//! Daily completion record model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar date's record for a user.
///
/// The natural key is (user, date): a new report for a date fully replaces
/// the prior record. Unsigned counts make negative values unrepresentable
/// past the request boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date (day resolution, no time component)
    pub date: NaiveDate,
    /// Number of tasks completed that day
    pub tasks_completed: u32,
    /// Points earned that day
    pub points_earned: u32,
    /// Whether the day counts toward a streak
    pub is_completed: bool,
    /// When this record was last written (RFC3339)
    pub updated_at: String,
}
