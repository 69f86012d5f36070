// SPDX-License-Identifier: MIT

//! Core derivation services.

pub mod achievements;
pub mod streak;

pub use achievements::{evaluate_achievements, STREAK_MILESTONES};
pub use streak::compute_stats;
