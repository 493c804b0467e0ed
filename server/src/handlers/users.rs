//! User CRUD.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::domain::{normalize_identifier, RegisterRequest, User, UserDto, UserUpdateRequest};
use crate::error::{ApiError, ApiResult};
use crate::repository::Repository;
use crate::state::AppState;
use crate::validation::Validate;

async fn require_user(state: &AppState, id: i64) -> ApiResult<User> {
    Ok(state.users.fetch(id).await?)
}

/// Validate, check uniqueness, hash and insert
pub(crate) async fn create_account(state: &AppState, req: &RegisterRequest) -> ApiResult<User> {
    ApiError::check(req.validate())?;

    if state.users.find_by_username(&req.username).await?.is_some() {
        return Err(ApiError::Conflict("Username already taken".into()));
    }
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = state.hash_password(&req.password).await?;
    let user = state
        .users
        .create(&User::new(&req.username, &req.email, hash))
        .await?;
    Ok(user)
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.users.list().await?;
    Ok(Json(users.iter().map(UserDto::from).collect()))
}

/// POST /api/users - Same rules as registration, answers with the profile.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let Json(req) = payload?;
    let user = create_account(&state, &req).await?;
    info!(user_id = user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(UserDto::from(&user))))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<UserDto>> {
    let Path(id) = path?;
    let user = require_user(&state, id).await?;
    Ok(Json(UserDto::from(&user)))
}

/// PUT /api/users/{id} - Partial update; blank fields keep their value.
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserUpdateRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let Path(id) = path?;
    let Json(req) = payload?;
    let mut user = require_user(&state, id).await?;
    ApiError::check(req.validate())?;

    if let Some(next) = req.username.as_deref().and_then(normalize_identifier) {
        if next != user.username {
            if let Some(existing) = state.users.find_by_username(&next).await? {
                if existing.id != id {
                    return Err(ApiError::Conflict("Username already taken".into()));
                }
            }
            user.username = next;
        }
    }

    if let Some(next) = req.email.as_deref().and_then(normalize_identifier) {
        if next != user.email {
            if let Some(existing) = state.users.find_by_email(&next).await? {
                if existing.id != id {
                    return Err(ApiError::Conflict("Email already registered".into()));
                }
            }
            user.email = next;
        }
    }

    if let Some(password) = req.password.as_deref().filter(|p| !p.trim().is_empty()) {
        user.password_hash = state.hash_password(password).await?;
    }

    let updated = state.users.update(&user).await?;
    info!(user_id = id, "User updated");
    Ok(Json(UserDto::from(&updated)))
}

/// DELETE /api/users/{id} - Removes the user and, by cascade, their pets.
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    state.users.delete(id).await?;
    info!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
