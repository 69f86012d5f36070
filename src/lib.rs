// SPDX-License-Identifier: MIT

//! Streak-Tracker: daily task-completion streaks and milestone achievements.
//!
//! This crate provides the backend API for recording per-user daily
//! completion records and deriving streak statistics and achievement
//! unlocks from them.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::MemoryStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemoryStore,
}
