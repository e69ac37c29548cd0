//! Course Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use super::{CreatedResult, JsonResult};
use crate::domain::models::ids::CourseId;
use crate::infrastructure::driving_adapters::api_rest::dto::course::{
    CourseListQuery, CourseResponseDto, CreateCourseDto, UpdateCourseDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiQuery, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/{id}", get(get_course).put(update_course).delete(delete_course))
}

/// GET /courses?active_only=true
///
/// # Responses
///
/// * 200 OK - Courses by title
#[axum::debug_handler]
async fn list_courses(
    _auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CourseListQuery>,
) -> JsonResult<Vec<CourseResponseDto>> {
    let courses = state.courses.list.execute(query.active_only).await?;
    Ok(ApiResponse::ok(courses.into_iter().map(CourseResponseDto::from).collect()))
}

/// POST /courses
///
/// # Responses
///
/// * 201 Created - Course created
/// * 400 Bad Request - Validation error
/// * 404 Not Found - Trainer does not exist
#[axum::debug_handler]
async fn create_course(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> CreatedResult<CourseResponseDto> {
    let course = state.courses.create.execute(dto.into()).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message(course.into(), "Course created")))
}

#[axum::debug_handler]
async fn get_course(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<CourseResponseDto> {
    let id = CourseId::try_from(id.as_str())?;
    let course = state.courses.get.execute(&id).await?;
    Ok(ApiResponse::ok(course.into()))
}

#[axum::debug_handler]
async fn update_course(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> JsonResult<CourseResponseDto> {
    let id = CourseId::try_from(id.as_str())?;
    let course = state.courses.update.execute(&id, dto.into()).await?;
    Ok(ApiResponse::with_message(course.into(), "Course updated"))
}

/// DELETE /courses/{id}
///
/// # Responses
///
/// * 204 No Content - Course and its sessions deleted
/// * 404 Not Found - Course does not exist
/// * 409 Conflict - Enrollments or registrations still reference the course
#[axum::debug_handler]
async fn delete_course(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = CourseId::try_from(id.as_str())?;
    state.courses.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
