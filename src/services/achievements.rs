// SPDX-License-Identifier: MIT

//! Achievement evaluation for streak milestones.

use std::collections::BTreeSet;

/// Streak lengths that unlock an achievement, ascending.
pub const STREAK_MILESTONES: [u32; 7] = [1, 3, 7, 14, 30, 60, 100];

/// Determine which milestones the current streak newly unlocks.
///
/// Every milestone is checked on every evaluation, not just the next
/// threshold, so a streak that jumps several milestones at once (e.g. after
/// a retroactive bulk import) unlocks all of them together, in ascending
/// order. Already-unlocked milestones are skipped, which makes repeated
/// evaluation a no-op; milestones are never revoked.
pub fn evaluate_achievements(current_streak: u32, unlocked: &BTreeSet<u32>) -> Vec<u32> {
    STREAK_MILESTONES
        .iter()
        .copied()
        .filter(|m| current_streak >= *m && !unlocked.contains(m))
        .collect()
}
