//! Session Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use super::{CreatedResult, JsonResult};
use crate::domain::models::ids::{CourseId, SessionId};
use crate::infrastructure::driving_adapters::api_rest::dto::session::{
    CreateSessionDto, SessionListQuery, SessionResponseDto, UpdateSessionDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiQuery, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route("/{id}", get(get_session).put(update_session).delete(delete_session))
}

/// GET /sessions?course_id=
///
/// # Responses
///
/// * 200 OK - Sessions by start date, with their enrolled count
#[axum::debug_handler]
async fn list_sessions(
    _auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SessionListQuery>,
) -> JsonResult<Vec<SessionResponseDto>> {
    let sessions = state
        .sessions
        .list
        .execute(query.course_id.map(CourseId::from_uuid))
        .await?;
    Ok(ApiResponse::ok(sessions.into_iter().map(SessionResponseDto::from).collect()))
}

/// POST /sessions
///
/// # Responses
///
/// * 201 Created - Session created
/// * 400 Bad Request - Validation error
/// * 404 Not Found - Course or trainer does not exist
#[axum::debug_handler]
async fn create_session(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSessionDto>,
) -> CreatedResult<SessionResponseDto> {
    let session = state.sessions.create.execute(dto.into()).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message(session.into(), "Session created")))
}

#[axum::debug_handler]
async fn get_session(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<SessionResponseDto> {
    let id = SessionId::try_from(id.as_str())?;
    let session = state.sessions.get.execute(&id).await?;
    Ok(ApiResponse::ok(session.into()))
}

#[axum::debug_handler]
async fn update_session(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateSessionDto>,
) -> JsonResult<SessionResponseDto> {
    let id = SessionId::try_from(id.as_str())?;
    let session = state.sessions.update.execute(&id, dto.into()).await?;
    Ok(ApiResponse::with_message(session.into(), "Session updated"))
}

#[axum::debug_handler]
async fn delete_session(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = SessionId::try_from(id.as_str())?;
    state.sessions.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
