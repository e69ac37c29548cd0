//! Student Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use super::{CreatedResult, JsonResult};
use crate::domain::models::ids::StudentId;
use crate::infrastructure::driving_adapters::api_rest::dto::enrollment::EnrollmentResponseDto;
use crate::infrastructure::driving_adapters::api_rest::dto::student::{
    CreateStudentDto, StudentListQuery, StudentPaymentsResponseDto, StudentResponseDto, UpdateStudentDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiQuery, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/{id}", get(get_student).put(update_student).delete(delete_student))
        .route("/{id}/enrollments", get(student_enrollments))
        .route("/{id}/payments", get(student_payments))
}

/// GET /students?search= - Students, optionally filtered by name
///
/// # Responses
///
/// * 200 OK - List of students
/// * 401 Unauthorized - Missing or invalid JWT token
#[axum::debug_handler]
async fn list_students(
    _auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StudentListQuery>,
) -> JsonResult<Vec<StudentResponseDto>> {
    let students = state.students.list.execute(query.search).await?;
    Ok(ApiResponse::ok(students.into_iter().map(StudentResponseDto::from).collect()))
}

/// POST /students
///
/// # Responses
///
/// * 201 Created - Student created
/// * 400 Bad Request - Validation error
#[axum::debug_handler]
async fn create_student(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> CreatedResult<StudentResponseDto> {
    let student = state.students.create.execute(dto.into()).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message(student.into(), "Student created")))
}

/// GET /students/{id}
///
/// # Responses
///
/// * 200 OK - Student found
/// * 404 Not Found - Student does not exist
#[axum::debug_handler]
async fn get_student(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<StudentResponseDto> {
    let id = StudentId::try_from(id.as_str())?;
    let student = state.students.get.execute(&id).await?;
    Ok(ApiResponse::ok(student.into()))
}

/// PUT /students/{id} - Update the provided fields
///
/// # Responses
///
/// * 200 OK - Student updated
/// * 400 Bad Request - Validation error
/// * 404 Not Found - Student does not exist
#[axum::debug_handler]
async fn update_student(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> JsonResult<StudentResponseDto> {
    let id = StudentId::try_from(id.as_str())?;
    let student = state.students.update.execute(&id, dto.into()).await?;
    Ok(ApiResponse::with_message(student.into(), "Student updated"))
}

/// DELETE /students/{id} - Removes the student with their enrollments and payments
///
/// # Responses
///
/// * 204 No Content - Student deleted
/// * 404 Not Found - Student does not exist
#[axum::debug_handler]
async fn delete_student(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = StudentId::try_from(id.as_str())?;
    state.students.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /students/{id}/enrollments
///
/// # Responses
///
/// * 200 OK - Enrollments of the student, newest first
/// * 404 Not Found - Student does not exist
#[axum::debug_handler]
async fn student_enrollments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<Vec<EnrollmentResponseDto>> {
    let id = StudentId::try_from(id.as_str())?;
    let enrollments = state.students.enrollments.execute(&id).await?;
    Ok(ApiResponse::ok(enrollments.into_iter().map(EnrollmentResponseDto::from).collect()))
}

/// GET /students/{id}/payments - Payment history and total paid
///
/// # Responses
///
/// * 200 OK - Payments, newest first
/// * 404 Not Found - Student does not exist
#[axum::debug_handler]
async fn student_payments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<StudentPaymentsResponseDto> {
    let id = StudentId::try_from(id.as_str())?;
    let history = state.students.payments.execute(&id).await?;
    Ok(ApiResponse::ok(history.into()))
}
