//! Login and registration.
//!
//! Both return the bare numeric user id; the UI keeps it as its session.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use tracing::info;

use super::users;
use crate::domain::{LoginRequest, RegisterRequest};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::validation::Validate;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<i64>> {
    let Json(req) = payload?;
    ApiError::check(req.validate())?;

    let Some(user) = state.users.find_by_username(&req.username).await? else {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.into()));
    };
    if !state.verify_password(&req.password, &user.password_hash).await? {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    info!(user_id = user.id, "User logged in");
    Ok(Json(user.id))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<i64>)> {
    let Json(req) = payload?;
    let user = users::create_account(&state, &req).await?;

    info!(user_id = user.id, username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(user.id)))
}
