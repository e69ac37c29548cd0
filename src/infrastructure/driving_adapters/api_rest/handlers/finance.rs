//! Finance Report Handlers

use axum::{extract::State, routing::get, Router};

use super::JsonResult;
use crate::domain::models::ids::CourseId;
use crate::infrastructure::driving_adapters::api_rest::dto::finance::{
    FinanceStatsDto, MonthlyTrackingDto, MonthlyTrackingQuery,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::ApiQuery;
use crate::infrastructure::driving_adapters::api_rest::middleware::{AuthUser, FINANCE_ROLES};
use crate::infrastructure::driving_adapters::api_rest::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/monthly-tracking", get(monthly_tracking))
        .route("/stats", get(finance_stats))
}

/// GET /finance/monthly-tracking?year=&course_id= - Per-student month grid
///
/// `year` defaults to the current year.
#[axum::debug_handler]
async fn monthly_tracking(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthlyTrackingQuery>,
) -> JsonResult<MonthlyTrackingDto> {
    auth.require_roles(FINANCE_ROLES)?;

    let tracking = state
        .finance
        .monthly_tracking
        .execute(query.year, query.course_id.map(CourseId::from_uuid))
        .await?;
    Ok(ApiResponse::ok(tracking.into()))
}

#[axum::debug_handler]
async fn finance_stats(auth: AuthUser, State(state): State<AppState>) -> JsonResult<FinanceStatsDto> {
    auth.require_roles(FINANCE_ROLES)?;

    let stats = state.finance.stats.execute().await?;
    Ok(ApiResponse::ok(stats.into()))
}
