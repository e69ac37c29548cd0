//! Transaction (Ledger) Handlers
//!
//! Restricted to administrators and staff.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use super::{CreatedResult, JsonResult};
use crate::domain::gateways::TransactionFilter;
use crate::domain::models::ids::{StudentId, TransactionId};
use crate::infrastructure::driving_adapters::api_rest::dto::transaction::{
    CreateTransactionDto, DateRangeQuery, LedgerSummaryDto, TransactionListQuery, TransactionResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::{parse_optional, ApiResponse};
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiQuery, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::middleware::{AuthUser, FINANCE_ROLES};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route("/summary", get(ledger_summary))
        .route("/{id}", get(get_transaction).delete(delete_transaction))
}

/// GET /transactions - Ledger entries, newest first
///
/// Filters: `type`, `source` (code or label), `from`, `to`, `student_id`.
#[axum::debug_handler]
async fn list_transactions(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TransactionListQuery>,
) -> JsonResult<Vec<TransactionResponseDto>> {
    auth.require_roles(FINANCE_ROLES)?;

    let filter = TransactionFilter {
        transaction_type: parse_optional(query.transaction_type.as_deref())?,
        source: parse_optional(query.source.as_deref())?,
        from: query.from,
        to: query.to,
        student_id: query.student_id.map(StudentId::from_uuid),
    };
    let transactions = state.transactions.list.execute(filter).await?;
    Ok(ApiResponse::ok(transactions.into_iter().map(TransactionResponseDto::from).collect()))
}

/// POST /transactions - Manual ledger entry
///
/// # Responses
///
/// * 201 Created - Entry recorded
/// * 400 Bad Request - Non-positive amount or reserved source
/// * 403 Forbidden - Role not allowed
#[axum::debug_handler]
async fn create_transaction(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTransactionDto>,
) -> CreatedResult<TransactionResponseDto> {
    auth.require_roles(FINANCE_ROLES)?;

    let data = dto.into_data(state.clock.today(), auth.id);
    let transaction = state.transactions.create.execute(data).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(transaction.into(), "Transaction created"),
    ))
}

/// GET /transactions/summary?from=&to= - Income, expense and balance
#[axum::debug_handler]
async fn ledger_summary(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DateRangeQuery>,
) -> JsonResult<LedgerSummaryDto> {
    auth.require_roles(FINANCE_ROLES)?;

    let summary = state.transactions.summary.execute(query.from, query.to).await?;
    Ok(ApiResponse::ok(summary.into()))
}

#[axum::debug_handler]
async fn get_transaction(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> JsonResult<TransactionResponseDto> {
    auth.require_roles(FINANCE_ROLES)?;

    let id = TransactionId::try_from(id.as_str())?;
    let transaction = state.transactions.get.execute(&id).await?;
    Ok(ApiResponse::ok(transaction.into()))
}

#[axum::debug_handler]
async fn delete_transaction(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    auth.require_roles(FINANCE_ROLES)?;

    let id = TransactionId::try_from(id.as_str())?;
    state.transactions.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
