// SPDX-License-Identifier: MIT

//! Streak statistics derivation.
//!
//! Pure functions over a user's daily records. A snapshot is recomputed
//! from scratch on every call, so the result depends only on the record
//! set and the supplied "today" — never on a prior snapshot.

use chrono::NaiveDate;

use crate::models::{DailyRecord, StatsSnapshot};

/// Compute a full statistics snapshot from a user's daily records.
///
/// Records may arrive in any order. Non-completed records are invisible to
/// both streak and total calculations: an incomplete day is a gap, not a
/// zero-length streak day. "Today" is supplied by the caller so that time
/// zone resolution stays outside the engine.
pub fn compute_stats<'a>(
    records: impl IntoIterator<Item = &'a DailyRecord>,
    today: NaiveDate,
) -> StatsSnapshot {
    let mut completed: Vec<&DailyRecord> = records
        .into_iter()
        .filter(|r| r.is_completed)
        .collect();
    completed.sort_unstable_by_key(|r| r.date);
    // (user, date) is the natural key; a later duplicate is ignored
    completed.dedup_by_key(|r| r.date);

    let total_points = completed.iter().map(|r| r.points_earned).sum();
    let dates: Vec<NaiveDate> = completed.iter().map(|r| r.date).collect();

    StatsSnapshot {
        current_streak: current_streak(&dates, today),
        longest_streak: longest_streak(&dates),
        total_active_days: dates.len() as u32,
        total_points,
    }
}

/// Consecutive completed days ending at `today`.
///
/// The streak is anchored at the most recent completed date, which must be
/// `today` or the day before: a user who completed yesterday but has not
/// logged today yet keeps their streak. Walking backwards, the count stops
/// at the first missing calendar day.
fn current_streak(sorted_dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some((&latest, rest)) = sorted_dates.split_last() else {
        return 0;
    };

    let lead_gap = today.signed_duration_since(latest).num_days();
    if !(0..=1).contains(&lead_gap) {
        return 0;
    }

    let mut streak = 1;
    let mut prev = latest;
    for &date in rest.iter().rev() {
        if prev.signed_duration_since(date).num_days() != 1 {
            break;
        }
        streak += 1;
        prev = date;
    }
    streak
}

/// Maximum run length over maximal runs of consecutive calendar dates.
///
/// A gap of two or more days breaks a run; a run of length 1 still counts.
fn longest_streak(sorted_dates: &[NaiveDate]) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for &date in sorted_dates {
        run = match prev {
            Some(p) if date.signed_duration_since(p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}
