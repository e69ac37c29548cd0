//! Authentication Handlers

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};

use super::JsonResult;
use crate::infrastructure::driven_adapters::token::issue_token;
use crate::infrastructure::driving_adapters::api_rest::dto::auth::{LoginDto, LoginResponseDto};
use crate::infrastructure::driving_adapters::api_rest::dto::user::UserResponseDto;
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::ValidatedJson;
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login)).route("/me", get(me))
}

/// POST /auth/login - Exchange credentials for a JWT
///
/// # Responses
///
/// * 200 OK - Token and user profile
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Unknown email, wrong password or inactive account
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> JsonResult<LoginResponseDto> {
    let user = state.auth.login.execute(&dto.email, &dto.password).await?;

    let issued = issue_token(&state.config.jwt, &user, state.clock.now()).map_err(|e| ApiError::Internal(e.into()))?;

    Ok(ApiResponse::with_message(
        LoginResponseDto {
            token: issued.token,
            token_type: "Bearer",
            expires_in: issued.expires_in,
            user: user.into(),
        },
        "Login successful",
    ))
}

/// GET /auth/me - Profile of the authenticated user
///
/// # Responses
///
/// * 200 OK - Current user
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - The account no longer exists
#[axum::debug_handler]
async fn me(auth: AuthUser, State(state): State<AppState>) -> JsonResult<UserResponseDto> {
    let user = state.auth.current_user.execute(&auth.id).await?;
    Ok(ApiResponse::ok(user.into()))
}
