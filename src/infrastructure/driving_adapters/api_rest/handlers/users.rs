//! User Management Handlers
//!
//! Administrators only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use super::{CreatedResult, JsonResult};
use crate::domain::models::ids::UserId;
use crate::infrastructure::driving_adapters::api_rest::dto::user::{
    CreateUserDto, UpdateUserDto, UserResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::ValidatedJson;
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

/// GET /users - All users, by name
///
/// # Responses
///
/// * 200 OK - List of users
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 403 Forbidden - Not an administrator
#[axum::debug_handler]
async fn list_users(auth: AuthUser, State(state): State<AppState>) -> JsonResult<Vec<UserResponseDto>> {
    auth.require_admin()?;

    let users = state.users.list.execute().await?;
    Ok(ApiResponse::ok(users.into_iter().map(UserResponseDto::from).collect()))
}

/// POST /users - Create a user
///
/// # Responses
///
/// * 201 Created - User created
/// * 400 Bad Request - Validation error
/// * 403 Forbidden - Not an administrator
/// * 409 Conflict - Email already in use
#[axum::debug_handler]
async fn create_user(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> CreatedResult<UserResponseDto> {
    auth.require_admin()?;

    let user = state.users.create.execute((&dto).into()).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message(user.into(), "User created")))
}

/// GET /users/{id}
///
/// # Responses
///
/// * 200 OK - User found
/// * 403 Forbidden - Not an administrator
/// * 404 Not Found - User does not exist
#[axum::debug_handler]
async fn get_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<UserResponseDto> {
    auth.require_admin()?;

    let id = UserId::try_from(id.as_str())?;
    let user = state.users.get.execute(&id).await?;
    Ok(ApiResponse::ok(user.into()))
}

/// PUT /users/{id} - Update profile, role, status or password
///
/// # Responses
///
/// * 200 OK - User updated
/// * 400 Bad Request - Validation error
/// * 403 Forbidden - Not an administrator
/// * 404 Not Found - User does not exist
/// * 409 Conflict - Email already in use
#[axum::debug_handler]
async fn update_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> JsonResult<UserResponseDto> {
    auth.require_admin()?;

    let id = UserId::try_from(id.as_str())?;
    let user = state.users.update.execute(&id, (&dto).into()).await?;
    Ok(ApiResponse::with_message(user.into(), "User updated"))
}

/// DELETE /users/{id}
///
/// # Responses
///
/// * 204 No Content - User deleted
/// * 403 Forbidden - Not an administrator
/// * 404 Not Found - User does not exist
/// * 409 Conflict - Attempt to delete one's own account
#[axum::debug_handler]
async fn delete_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    auth.require_admin()?;

    let id = UserId::try_from(id.as_str())?;
    state.users.delete.execute(&id, &auth.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
