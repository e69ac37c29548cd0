//! Enrollment Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Router,
};

use super::{CreatedResult, JsonResult};
use crate::domain::models::ids::{EnrollmentId, StudentId};
use crate::infrastructure::driving_adapters::api_rest::dto::enrollment::{
    CreateEnrollmentDto, CreatedEnrollmentResponseDto, EnrollmentListQuery, EnrollmentResponseDto,
    UpdateEnrollmentStatusDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiQuery, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route("/{id}", get(get_enrollment).delete(delete_enrollment))
        .route("/{id}/status", patch(update_enrollment_status))
}

/// GET /enrollments?student_id=
#[axum::debug_handler]
async fn list_enrollments(
    _auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EnrollmentListQuery>,
) -> JsonResult<Vec<EnrollmentResponseDto>> {
    let enrollments = state
        .enrollments
        .list
        .execute(query.student_id.map(StudentId::from_uuid))
        .await?;
    Ok(ApiResponse::ok(enrollments.into_iter().map(EnrollmentResponseDto::from).collect()))
}

/// POST /enrollments - Enroll a student, generating the plan's schedule
///
/// # Responses
///
/// * 201 Created - Enrollment and its installments
/// * 400 Bad Request - Validation error or inactive course
/// * 404 Not Found - Student, course, session or payment plan does not exist
#[axum::debug_handler]
async fn create_enrollment(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateEnrollmentDto>,
) -> CreatedResult<CreatedEnrollmentResponseDto> {
    let created = state.enrollments.create.execute(dto.into(), Some(auth.id)).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(created.into(), "Enrollment created"),
    ))
}

#[axum::debug_handler]
async fn get_enrollment(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<EnrollmentResponseDto> {
    let id = EnrollmentId::try_from(id.as_str())?;
    let enrollment = state.enrollments.get.execute(&id).await?;
    Ok(ApiResponse::ok(enrollment.into()))
}

/// PATCH /enrollments/{id}/status
///
/// # Responses
///
/// * 200 OK - Status changed
/// * 400 Bad Request - Unknown status or transition out of a closed enrollment
/// * 404 Not Found - Enrollment does not exist
#[axum::debug_handler]
async fn update_enrollment_status(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateEnrollmentStatusDto>,
) -> JsonResult<EnrollmentResponseDto> {
    let id = EnrollmentId::try_from(id.as_str())?;
    let enrollment = state.enrollments.update_status.execute(&id, dto.status).await?;
    Ok(ApiResponse::with_message(enrollment.into(), "Enrollment status updated"))
}

/// DELETE /enrollments/{id} - Removes the enrollment with its schedule and payments
#[axum::debug_handler]
async fn delete_enrollment(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = EnrollmentId::try_from(id.as_str())?;
    state.enrollments.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
