// SPDX-License-Identifier: MIT

//! Streak recording, listing, reset, and export routes.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::memory::DayReport;
use crate::error::{AppError, Result};
use crate::models::{Achievement, DailyRecord, StatsSnapshot};
use crate::time_utils::now_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/streaks", get(get_streaks).post(record_day))
        .route("/api/streaks/reset", post(reset_user_data))
        .route("/api/streaks/export", get(export_user_data))
}

/// Stats snapshot as returned to clients.
#[derive(Serialize)]
pub struct StatsResponse {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
    pub total_points: u32,
    pub last_updated: String,
}

impl StatsResponse {
    fn new(stats: StatsSnapshot, last_updated: String) -> Self {
        Self {
            current_streak: stats.current_streak,
            longest_streak: stats.longest_streak,
            total_active_days: stats.total_active_days,
            total_points: stats.total_points,
            last_updated,
        }
    }
}

/// Resolve the caller-supplied "today", defaulting to the server's UTC
/// date. Time zone handling stays with the caller.
fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Utc::now().date_naive())
}

// ─── Record a Day ────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct RecordDayRequest {
    #[validate(length(min = 1, max = 64))]
    user_id: String,
    /// Day being reported; defaults to "today"
    date: Option<NaiveDate>,
    #[serde(default)]
    tasks_completed: u32,
    #[serde(default)]
    points_earned: u32,
    #[serde(default = "default_is_completed")]
    is_completed: bool,
    /// Caller-resolved "today" used to anchor the current streak
    today: Option<NaiveDate>,
}

fn default_is_completed() -> bool {
    true
}

#[derive(Serialize)]
pub struct RecordDayResponse {
    pub success: bool,
    pub message: String,
    pub date: NaiveDate,
    pub stats: StatsResponse,
    pub unlocked_achievements: Vec<u32>,
}

/// Record one day's activity for a user.
///
/// The day's record is fully replaced, the stats snapshot recomputed, and
/// newly qualifying milestones unlocked, all serialized per user by the
/// store.
async fn record_day(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RecordDayRequest>,
) -> Result<Json<RecordDayResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let today = resolve_today(payload.today);
    let date = payload.date.unwrap_or(today);

    let update = state.db.record_day(
        &payload.user_id,
        DayReport {
            date,
            tasks_completed: payload.tasks_completed,
            points_earned: payload.points_earned,
            is_completed: payload.is_completed,
        },
        today,
    );

    tracing::info!(
        user_id = %payload.user_id,
        date = %date,
        current_streak = update.stats.current_streak,
        unlocked = ?update.newly_unlocked,
        "Streak updated"
    );

    Ok(Json(RecordDayResponse {
        success: true,
        message: "Streak updated successfully".to_string(),
        date,
        stats: StatsResponse::new(update.stats, update.last_updated),
        unlocked_achievements: update.newly_unlocked,
    }))
}

// ─── List Streaks ────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct StreaksQuery {
    #[validate(length(min = 1, max = 64))]
    user_id: String,
    /// Caller-resolved "today"; the history window ends here
    today: Option<NaiveDate>,
}

/// One day's record as shown in the streaks listing.
#[derive(Serialize)]
pub struct DayEntry {
    pub tasks_completed: u32,
    pub points_earned: u32,
    pub is_completed: bool,
}

#[derive(Serialize)]
pub struct StreaksResponse {
    pub success: bool,
    /// Records keyed by date, most recent window only
    pub streaks: BTreeMap<NaiveDate, DayEntry>,
    pub stats: StatsResponse,
    /// Unlocked milestones, ascending
    pub achievements: Vec<u32>,
}

/// Get a user's recent records, stored stats, and unlocked milestones.
///
/// Returns the last `history_days` of records. The stats are the snapshot
/// stored by the most recent write; an unknown user gets zeroes.
async fn get_streaks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StreaksQuery>,
) -> Result<Json<StreaksResponse>> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let today = resolve_today(params.today);
    let from = today
        .checked_sub_days(Days::new(state.config.history_days as u64))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("History window underflow")))?;

    let view = state.db.user_view(&params.user_id, from, today);

    tracing::debug!(
        user_id = %params.user_id,
        records = view.records.len(),
        "Fetched streaks"
    );

    let streaks = view
        .records
        .into_iter()
        .map(|(date, record)| {
            (
                date,
                DayEntry {
                    tasks_completed: record.tasks_completed,
                    points_earned: record.points_earned,
                    is_completed: record.is_completed,
                },
            )
        })
        .collect();

    Ok(Json(StreaksResponse {
        success: true,
        streaks,
        stats: StatsResponse::new(view.stats, view.last_updated),
        achievements: view.achievements,
    }))
}

// ─── Reset ───────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct ResetRequest {
    #[validate(length(min = 1, max = 64))]
    user_id: String,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// Delete all of a user's streak data. This bypasses the derivation
/// engine entirely; resetting an unknown user is not an error.
async fn reset_user_data(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<ResetResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let existed = state.db.reset_user(&payload.user_id);
    tracing::info!(user_id = %payload.user_id, existed, "User data reset");

    Ok(Json(ResetResponse {
        success: true,
        message: "All user data reset successfully".to_string(),
    }))
}

// ─── Export ──────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct ExportQuery {
    #[validate(length(min = 1, max = 64))]
    user_id: String,
}

#[derive(Serialize)]
pub struct ExportResponse {
    pub user_id: String,
    pub export_date: String,
    pub streaks: Vec<DailyRecord>,
    pub achievements: Vec<Achievement>,
    pub stats: StatsResponse,
}

/// Export all of a user's stored data as JSON.
async fn export_user_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportQuery>,
) -> Result<Json<ExportResponse>> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let export = state
        .db
        .export_user(&params.user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;

    Ok(Json(ExportResponse {
        user_id: export.user.user_id,
        export_date: now_rfc3339(),
        streaks: export.records,
        achievements: export.achievements,
        stats: StatsResponse::new(export.stats, export.last_updated),
    }))
}
