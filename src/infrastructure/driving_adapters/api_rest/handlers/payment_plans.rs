//! Payment Plan Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use super::{CreatedResult, JsonResult};
use crate::domain::models::ids::PaymentPlanId;
use crate::infrastructure::driving_adapters::api_rest::dto::payment_plan::{
    CreatePaymentPlanDto, PaymentPlanResponseDto, UpdatePaymentPlanDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::ValidatedJson;
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plans).post(create_plan))
        .route("/{id}", get(get_plan).put(update_plan).delete(delete_plan))
}

#[axum::debug_handler]
async fn list_plans(_auth: AuthUser, State(state): State<AppState>) -> JsonResult<Vec<PaymentPlanResponseDto>> {
    let plans = state.payment_plans.list.execute().await?;
    Ok(ApiResponse::ok(plans.into_iter().map(PaymentPlanResponseDto::from).collect()))
}

#[axum::debug_handler]
async fn create_plan(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePaymentPlanDto>,
) -> CreatedResult<PaymentPlanResponseDto> {
    let plan = state.payment_plans.create.execute(dto.into()).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message(plan.into(), "Payment plan created")))
}

#[axum::debug_handler]
async fn get_plan(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<PaymentPlanResponseDto> {
    let id = PaymentPlanId::try_from(id.as_str())?;
    let plan = state.payment_plans.get.execute(&id).await?;
    Ok(ApiResponse::ok(plan.into()))
}

#[axum::debug_handler]
async fn update_plan(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdatePaymentPlanDto>,
) -> JsonResult<PaymentPlanResponseDto> {
    let id = PaymentPlanId::try_from(id.as_str())?;
    let plan = state.payment_plans.update.execute(&id, dto.into()).await?;
    Ok(ApiResponse::with_message(plan.into(), "Payment plan updated"))
}

/// DELETE /payment-plans/{id} - Existing enrollments keep their schedule
#[axum::debug_handler]
async fn delete_plan(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = PaymentPlanId::try_from(id.as_str())?;
    state.payment_plans.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
