//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User profile stored alongside the user's records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Caller-chosen user ID (also the storage key)
    pub user_id: String,
    /// When the user was first seen
    pub created_at: String,
    /// Last time the user checked in
    pub last_active: String,
}
