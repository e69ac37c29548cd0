//! Dashboard Handlers

use axum::{extract::State, routing::get, Router};

use super::JsonResult;
use crate::infrastructure::driving_adapters::api_rest::dto::finance::DashboardStatsDto;
use crate::infrastructure::driving_adapters::api_rest::dto::payment_schedule::{DaysQuery, DueItemDto};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::extractors::ApiQuery;
use crate::infrastructure::driving_adapters::api_rest::middleware::{AuthUser, FINANCE_ROLES};
use crate::infrastructure::driving_adapters::api_rest::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard_stats))
        .route("/payment-alerts", get(payment_alerts))
}

/// GET /dashboard/stats - Headline counters, revenue and collection figures
#[axum::debug_handler]
async fn dashboard_stats(auth: AuthUser, State(state): State<AppState>) -> JsonResult<DashboardStatsDto> {
    auth.require_roles(FINANCE_ROLES)?;

    let stats = state.dashboard.stats.execute().await?;
    Ok(ApiResponse::ok(stats.into()))
}

/// GET /dashboard/payment-alerts?days= - Late installments and those due soon
#[axum::debug_handler]
async fn payment_alerts(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DaysQuery>,
) -> JsonResult<Vec<DueItemDto>> {
    auth.require_roles(FINANCE_ROLES)?;

    let alerts = state.dashboard.payment_alerts.execute(query.days).await?;
    Ok(ApiResponse::ok(alerts.into_iter().map(DueItemDto::from).collect()))
}
