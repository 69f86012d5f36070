// SPDX-License-Identifier: MIT

//! In-memory record store with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage)
//! - Daily records (keyed by (user, date), last-write-wins replace)
//! - Stats snapshots (recomputed in full on every write)
//! - Achievements (monotonic milestone set)
//!
//! Each user's data lives under one map entry. Holding the entry guard for
//! the whole write path serializes the recompute-and-unlock sequence per
//! user, which is the concurrency contract the derivation engine requires.
//! Operations on different users only contend on unrelated map shards.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use dashmap::DashMap;

use crate::models::{Achievement, DailyRecord, StatsSnapshot, User};
use crate::services::{compute_stats, evaluate_achievements};
use crate::time_utils::now_rfc3339;

/// In-memory store for all user data.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<String, UserData>,
}

/// Everything stored for one user.
#[derive(Debug, Clone)]
struct UserData {
    profile: User,
    records: BTreeMap<NaiveDate, DailyRecord>,
    stats: StatsSnapshot,
    stats_updated_at: String,
    achievements: BTreeMap<u32, Achievement>,
}

impl UserData {
    fn new(user_id: &str, now: &str) -> Self {
        Self {
            profile: User {
                user_id: user_id.to_string(),
                created_at: now.to_string(),
                last_active: now.to_string(),
            },
            records: BTreeMap::new(),
            stats: StatsSnapshot::default(),
            stats_updated_at: now.to_string(),
            achievements: BTreeMap::new(),
        }
    }
}

/// A caller's report of one day's activity.
#[derive(Debug, Clone, Copy)]
pub struct DayReport {
    pub date: NaiveDate,
    pub tasks_completed: u32,
    pub points_earned: u32,
    pub is_completed: bool,
}

/// Result of recording a day: the fresh snapshot and any new unlocks.
#[derive(Debug, Clone)]
pub struct DayUpdate {
    pub stats: StatsSnapshot,
    pub last_updated: String,
    pub newly_unlocked: Vec<u32>,
}

/// A user's records in a date window plus derived state.
#[derive(Debug, Clone, Default)]
pub struct UserView {
    pub records: BTreeMap<NaiveDate, DailyRecord>,
    pub stats: StatsSnapshot,
    pub last_updated: String,
    pub achievements: Vec<u32>,
}

/// Full dump of a user's stored data.
#[derive(Debug, Clone)]
pub struct UserExport {
    pub user: User,
    pub records: Vec<DailyRecord>,
    pub achievements: Vec<Achievement>,
    pub stats: StatsSnapshot,
    pub last_updated: String,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Create a user if absent and bump their last-active timestamp.
    pub fn upsert_user(&self, user_id: &str) -> User {
        let now = now_rfc3339();
        let mut entry = self
            .users
            .entry(user_id.to_string())
            .or_insert_with(|| UserData::new(user_id, &now));
        entry.profile.last_active = now;
        entry.profile.clone()
    }

    // ─── Daily Record Operations ─────────────────────────────────

    /// Record one day's activity and derive the consequences.
    ///
    /// The day's record is fully replaced (never partially updated), the
    /// stats snapshot is recomputed from the complete record set, and any
    /// milestones the new current streak qualifies for are unlocked. All of
    /// it happens under this user's entry guard, so two racing writes for
    /// the same user cannot observe the same pre-update achievement set.
    ///
    /// Recording a day for an unknown user creates the user.
    pub fn record_day(&self, user_id: &str, report: DayReport, today: NaiveDate) -> DayUpdate {
        let now = now_rfc3339();
        let mut entry = self
            .users
            .entry(user_id.to_string())
            .or_insert_with(|| UserData::new(user_id, &now));
        let data = entry.value_mut();

        data.records.insert(
            report.date,
            DailyRecord {
                date: report.date,
                tasks_completed: report.tasks_completed,
                points_earned: report.points_earned,
                is_completed: report.is_completed,
                updated_at: now.clone(),
            },
        );

        let stats = compute_stats(data.records.values(), today);
        let already_unlocked: BTreeSet<u32> = data.achievements.keys().copied().collect();
        let newly_unlocked = evaluate_achievements(stats.current_streak, &already_unlocked);
        for &milestone in &newly_unlocked {
            data.achievements.insert(
                milestone,
                Achievement {
                    milestone,
                    unlocked_at: now.clone(),
                },
            );
        }

        data.stats = stats;
        data.stats_updated_at = now.clone();

        DayUpdate {
            stats,
            last_updated: now,
            newly_unlocked,
        }
    }

    /// Records in `[from, to]` plus the stored snapshot and unlocked
    /// milestones. An unknown user yields an empty, zero-valued view.
    pub fn user_view(&self, user_id: &str, from: NaiveDate, to: NaiveDate) -> UserView {
        match self.users.get(user_id) {
            Some(data) => UserView {
                records: data
                    .records
                    .range(from..=to)
                    .map(|(date, record)| (*date, record.clone()))
                    .collect(),
                stats: data.stats,
                last_updated: data.stats_updated_at.clone(),
                achievements: data.achievements.keys().copied().collect(),
            },
            None => UserView::default(),
        }
    }

    // ─── Reset / Export ──────────────────────────────────────────

    /// Delete a user's records, achievements, and stats. The profile
    /// itself survives. Returns whether the user existed.
    pub fn reset_user(&self, user_id: &str) -> bool {
        match self.users.get_mut(user_id) {
            Some(mut data) => {
                data.records.clear();
                data.achievements.clear();
                data.stats = StatsSnapshot::default();
                data.stats_updated_at = now_rfc3339();
                true
            }
            None => false,
        }
    }

    /// Full dump of everything stored for a user.
    pub fn export_user(&self, user_id: &str) -> Option<UserExport> {
        self.users.get(user_id).map(|data| UserExport {
            user: data.profile.clone(),
            records: data.records.values().cloned().collect(),
            achievements: data.achievements.values().cloned().collect(),
            stats: data.stats,
            last_updated: data.stats_updated_at.clone(),
        })
    }
}
