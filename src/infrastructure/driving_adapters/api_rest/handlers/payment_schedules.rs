//! Payment Schedule Handlers
//!
//! Installment schedules of enrollments, payments against them and the
//! overdue/upcoming reports.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Router,
};

use super::{CreatedResult, JsonResult};
use crate::domain::gateways::ScheduleFilter;
use crate::domain::models::ids::{CourseId, EnrollmentId, InstallmentId, StudentId};
use crate::domain::models::installment::InstallmentStatus;
use crate::infrastructure::driving_adapters::api_rest::dto::payment_schedule::{
    AffectedRowsDto, DaysQuery, DueItemDto, EnrollmentPaymentResponseDto, EnrollmentScheduleResponseDto,
    InstallmentResponseDto, OverdueReportDto, PaymentDto, PaymentResponseDto, ScheduleLineResponseDto,
    ScheduleListQuery, UpdateInstallmentDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::{parse_optional, ApiResponse};
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiQuery, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules))
        .route("/overdue", get(overdue_report))
        .route("/upcoming", get(upcoming_installments))
        .route("/refresh-statuses", post(refresh_statuses))
        .route("/generate/{enrollment_id}", post(generate_schedule))
        .route(
            "/enrollment/{enrollment_id}",
            get(get_enrollment_schedule).delete(delete_enrollment_schedule),
        )
        .route("/enrollment/{enrollment_id}/pay", post(pay_enrollment))
        .route("/{id}", put(update_installment))
        .route("/{id}/pay", post(pay_installment))
        .route("/{id}/payments", get(installment_payments))
}

/// GET /payment-schedules - Installments with student and course
///
/// Filters: `status` (code or label, matched against today's status),
/// `student_id`, `enrollment_id`, `course_id`.
#[axum::debug_handler]
async fn list_schedules(
    _auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ScheduleListQuery>,
) -> JsonResult<Vec<ScheduleLineResponseDto>> {
    let status: Option<InstallmentStatus> = parse_optional(query.status.as_deref())?;
    let filter = ScheduleFilter {
        student_id: query.student_id.map(StudentId::from_uuid),
        enrollment_id: query.enrollment_id.map(EnrollmentId::from_uuid),
        course_id: query.course_id.map(CourseId::from_uuid),
    };

    let lines = state.schedules.list.execute(filter, status).await?;
    Ok(ApiResponse::ok(lines.into_iter().map(ScheduleLineResponseDto::from).collect()))
}

/// GET /payment-schedules/overdue - Late installments, grouped by student
#[axum::debug_handler]
async fn overdue_report(_auth: AuthUser, State(state): State<AppState>) -> JsonResult<OverdueReportDto> {
    let report = state.schedules.overdue.execute().await?;
    Ok(ApiResponse::ok(report.into()))
}

/// GET /payment-schedules/upcoming?days= - Unpaid installments due within the window
#[axum::debug_handler]
async fn upcoming_installments(
    _auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DaysQuery>,
) -> JsonResult<Vec<DueItemDto>> {
    let items = state.schedules.upcoming.execute(query.days).await?;
    Ok(ApiResponse::ok(items.into_iter().map(DueItemDto::from).collect()))
}

/// POST /payment-schedules/refresh-statuses - Persist overdue statuses
#[axum::debug_handler]
async fn refresh_statuses(_auth: AuthUser, State(state): State<AppState>) -> JsonResult<AffectedRowsDto> {
    let count = state.schedules.refresh_statuses.execute().await?;
    Ok(ApiResponse::with_message(AffectedRowsDto { count }, "Installment statuses refreshed"))
}

/// POST /payment-schedules/generate/{enrollment_id}
///
/// # Responses
///
/// * 201 Created - Generated installments
/// * 400 Bad Request - Course has no price to schedule
/// * 404 Not Found - Enrollment does not exist
/// * 409 Conflict - Enrollment already has a schedule
#[axum::debug_handler]
async fn generate_schedule(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
) -> CreatedResult<Vec<InstallmentResponseDto>> {
    let enrollment_id = EnrollmentId::try_from(enrollment_id.as_str())?;
    let installments = state.schedules.generate.execute(&enrollment_id).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(
            installments.into_iter().map(InstallmentResponseDto::from).collect(),
            "Payment schedule generated",
        ),
    ))
}

#[axum::debug_handler]
async fn get_enrollment_schedule(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
) -> JsonResult<EnrollmentScheduleResponseDto> {
    let enrollment_id = EnrollmentId::try_from(enrollment_id.as_str())?;
    let schedule = state.schedules.enrollment_schedule.execute(&enrollment_id).await?;
    Ok(ApiResponse::ok(schedule.into()))
}

/// DELETE /payment-schedules/enrollment/{enrollment_id}
///
/// # Responses
///
/// * 200 OK - Number of installments removed
/// * 409 Conflict - Payments were already recorded
#[axum::debug_handler]
async fn delete_enrollment_schedule(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
) -> JsonResult<AffectedRowsDto> {
    let enrollment_id = EnrollmentId::try_from(enrollment_id.as_str())?;
    let count = state.schedules.delete_schedule.execute(&enrollment_id).await?;
    Ok(ApiResponse::with_message(AffectedRowsDto { count }, "Payment schedule deleted"))
}

/// POST /payment-schedules/enrollment/{enrollment_id}/pay
///
/// Spreads the amount over the unpaid installments, oldest due date first.
#[axum::debug_handler]
async fn pay_enrollment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
    ValidatedJson(dto): ValidatedJson<PaymentDto>,
) -> JsonResult<EnrollmentPaymentResponseDto> {
    let enrollment_id = EnrollmentId::try_from(enrollment_id.as_str())?;
    let outcome = state
        .schedules
        .pay_enrollment
        .execute(&enrollment_id, dto.into(), Some(auth.id))
        .await?;
    Ok(ApiResponse::with_message(outcome.into(), "Payment recorded"))
}

/// PUT /payment-schedules/{id} - Reschedule, re-price or cancel an installment
#[axum::debug_handler]
async fn update_installment(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateInstallmentDto>,
) -> JsonResult<InstallmentResponseDto> {
    let id = InstallmentId::try_from(id.as_str())?;
    let installment = state.schedules.update_installment.execute(&id, dto.into()).await?;
    Ok(ApiResponse::with_message(installment.into(), "Installment updated"))
}

/// POST /payment-schedules/{id}/pay
///
/// # Responses
///
/// * 200 OK - Installment with its new paid amount
/// * 400 Bad Request - Non-positive amount, overpayment, or installment paid or cancelled
/// * 404 Not Found - Installment does not exist
#[axum::debug_handler]
async fn pay_installment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<PaymentDto>,
) -> JsonResult<InstallmentResponseDto> {
    let id = InstallmentId::try_from(id.as_str())?;
    let installment = state
        .schedules
        .pay_installment
        .execute(&id, dto.into(), Some(auth.id))
        .await?;
    Ok(ApiResponse::with_message(installment.into(), "Payment recorded"))
}

#[axum::debug_handler]
async fn installment_payments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<Vec<PaymentResponseDto>> {
    let id = InstallmentId::try_from(id.as_str())?;
    let payments = state.schedules.installment_payments.execute(&id).await?;
    Ok(ApiResponse::ok(payments.into_iter().map(PaymentResponseDto::from).collect()))
}
