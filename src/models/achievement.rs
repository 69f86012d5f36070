// SPDX-License-Identifier: MIT

//! Streak milestone achievements.

use serde::{Deserialize, Serialize};

/// An unlocked streak milestone for a user.
///
/// Once unlocked an achievement is never revoked, even if the current
/// streak later drops below the milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Streak-length threshold that was reached
    pub milestone: u32,
    /// When the milestone was unlocked (RFC3339)
    pub unlocked_at: String,
}
