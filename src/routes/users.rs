// SPDX-License-Identifier: MIT

//! User registration routes.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", post(create_user))
}

#[derive(Deserialize, Validate)]
struct CreateUserRequest {
    #[validate(length(min = 1, max = 64))]
    user_id: String,
}

#[derive(Serialize)]
pub struct CreateUserResponse {
    pub success: bool,
    pub user_id: String,
    pub message: String,
}

/// Create a new user, or touch an existing one.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = state.db.upsert_user(&payload.user_id);
    tracing::info!(user_id = %user.user_id, "User created/updated");

    Ok(Json(CreateUserResponse {
        success: true,
        user_id: user.user_id,
        message: "User created/updated successfully".to_string(),
    }))
}
