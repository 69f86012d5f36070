// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod achievement;
pub mod record;
pub mod stats;
pub mod user;

pub use achievement::Achievement;
pub use record::DailyRecord;
pub use stats::StatsSnapshot;
pub use user::User;
