//! Registration Handlers
//!
//! A registration waits for its fee (`PENDING_PAYMENT`) until an
//! administrator validates it into a student and an enrollment, or
//! rejects it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use super::{CreatedResult, JsonResult};
use crate::domain::models::ids::{PaymentPlanId, RegistrationId};
use crate::domain::models::registration::RegistrationStatus;
use crate::infrastructure::driving_adapters::api_rest::dto::registration::{
    CreateRegistrationDto, RegistrationListQuery, RegistrationResponseDto, RejectRegistrationDto,
    UpdateRegistrationDto, ValidateRegistrationDto, ValidatedRegistrationResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::{parse_optional, ApiResponse};
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiQuery, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_registrations).post(create_registration))
        .route(
            "/{id}",
            get(get_registration).put(update_registration).delete(delete_registration),
        )
        .route("/{id}/pay-fee", post(pay_fee))
        .route("/{id}/validate", post(validate_registration))
        .route("/{id}/reject", post(reject_registration))
}

/// GET /registrations?status= - Newest first; status by code or label
///
/// # Responses
///
/// * 200 OK - Registrations
/// * 400 Bad Request - Unknown status
#[axum::debug_handler]
async fn list_registrations(
    _auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RegistrationListQuery>,
) -> JsonResult<Vec<RegistrationResponseDto>> {
    let status: Option<RegistrationStatus> = parse_optional(query.status.as_deref())?;

    let registrations = state.registrations.list.execute(status).await?;
    Ok(ApiResponse::ok(registrations.into_iter().map(RegistrationResponseDto::from).collect()))
}

/// POST /registrations - New registration awaiting its fee
///
/// # Responses
///
/// * 201 Created - Registration created with status `PENDING_PAYMENT`
/// * 400 Bad Request - Validation error, or session of another course
/// * 404 Not Found - Course or session does not exist
#[axum::debug_handler]
async fn create_registration(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateRegistrationDto>,
) -> CreatedResult<RegistrationResponseDto> {
    let registration = state.registrations.create.execute(dto.into()).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(registration.into(), "Registration created"),
    ))
}

#[axum::debug_handler]
async fn get_registration(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<RegistrationResponseDto> {
    let id = RegistrationId::try_from(id.as_str())?;
    let registration = state.registrations.get.execute(&id).await?;
    Ok(ApiResponse::ok(registration.into()))
}

/// PUT /registrations/{id}
///
/// # Responses
///
/// * 200 OK - Registration updated
/// * 400 Bad Request - Validation error, or registration already validated
/// * 404 Not Found - Registration does not exist
#[axum::debug_handler]
async fn update_registration(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateRegistrationDto>,
) -> JsonResult<RegistrationResponseDto> {
    let id = RegistrationId::try_from(id.as_str())?;
    let registration = state.registrations.update.execute(&id, dto.into()).await?;
    Ok(ApiResponse::with_message(registration.into(), "Registration updated"))
}

/// DELETE /registrations/{id}
///
/// # Responses
///
/// * 204 No Content - Registration deleted
/// * 400 Bad Request - Registration already validated
/// * 404 Not Found - Registration does not exist
#[axum::debug_handler]
async fn delete_registration(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = RegistrationId::try_from(id.as_str())?;
    state.registrations.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /registrations/{id}/pay-fee - Collect the registration fee
///
/// # Responses
///
/// * 200 OK - Fee marked paid and recorded in the ledger
/// * 400 Bad Request - Fee already paid or registration closed
/// * 404 Not Found - Registration does not exist
#[axum::debug_handler]
async fn pay_fee(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<RegistrationResponseDto> {
    let id = RegistrationId::try_from(id.as_str())?;
    let registration = state.registrations.pay_fee.execute(&id, Some(auth.id)).await?;
    Ok(ApiResponse::with_message(registration.into(), "Registration fee paid"))
}

/// POST /registrations/{id}/validate - Turn the registration into a student and an enrollment
///
/// The body is optional; a `paymentPlanId` generates the installment schedule.
///
/// # Responses
///
/// * 200 OK - Registration validated
/// * 400 Bad Request - Registration not pending payment
/// * 403 Forbidden - Not an administrator
/// * 404 Not Found - Registration, course or payment plan does not exist
#[axum::debug_handler]
async fn validate_registration(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<ValidateRegistrationDto>>,
) -> JsonResult<ValidatedRegistrationResponseDto> {
    auth.require_admin()?;

    let id = RegistrationId::try_from(id.as_str())?;
    let Json(dto) = body.unwrap_or_default();
    let plan_id = dto.payment_plan_id.map(PaymentPlanId::from_uuid);

    let outcome = state.registrations.validate.execute(&id, plan_id, Some(auth.id)).await?;
    Ok(ApiResponse::with_message(outcome.into(), "Registration validated"))
}

/// POST /registrations/{id}/reject
///
/// # Responses
///
/// * 200 OK - Registration rejected
/// * 400 Bad Request - Registration already validated
/// * 403 Forbidden - Not an administrator
/// * 404 Not Found - Registration does not exist
#[axum::debug_handler]
async fn reject_registration(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<RejectRegistrationDto>>,
) -> JsonResult<RegistrationResponseDto> {
    auth.require_admin()?;

    let id = RegistrationId::try_from(id.as_str())?;
    let Json(dto) = body.unwrap_or_default();
    dto.validate()?;

    let registration = state.registrations.reject.execute(&id, dto.notes).await?;
    Ok(ApiResponse::with_message(registration.into(), "Registration rejected"))
}
