//! Transaction (Ledger) DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::finance::LedgerSummary;
use crate::domain::models::ids::{StudentId, UserId};
use crate::domain::models::transaction::{
    CreateTransactionData, Transaction, TransactionSource, TransactionType,
};

/// DTO for a manual ledger entry
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionDto {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub source: TransactionSource,

    pub amount: Decimal,

    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 200, message = "motif must be at most 200 characters"))]
    pub motif: Option<String>,

    /// Defaults to today
    pub transaction_date: Option<NaiveDate>,

    pub student_id: Option<Uuid>,
}

impl CreateTransactionDto {
    /// Domain data for this entry, recorded by `created_by` on `today`
    #[must_use]
    pub fn into_data(self, today: NaiveDate, created_by: UserId) -> CreateTransactionData {
        CreateTransactionData {
            transaction_type: self.transaction_type,
            source: self.source,
            amount: self.amount,
            description: self.description,
            motif: self.motif,
            transaction_date: self.transaction_date.unwrap_or(today),
            student_id: self.student_id.map(StudentId::from_uuid),
            payment_id: None,
            created_by: Some(created_by),
        }
    }
}

/// Query parameters for listing ledger entries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionListQuery {
    /// `INCOME`/`EXPENSE` or their French labels
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub source: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub student_id: Option<Uuid>,
}

/// Date range of the ledger summary, both ends inclusive
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponseDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub type_label: &'static str,
    pub source: TransactionSource,
    pub source_label: &'static str,
    pub amount: Decimal,
    pub description: Option<String>,
    pub motif: Option<String>,
    pub transaction_date: NaiveDate,
    pub student_id: Option<Uuid>,
    pub payment_id: Option<Uuid>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponseDto {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: *transaction.id().as_uuid(),
            transaction_type: transaction.transaction_type(),
            type_label: transaction.transaction_type().label(),
            source: transaction.source(),
            source_label: transaction.source().label(),
            amount: transaction.amount(),
            description: transaction.description().map(ToString::to_string),
            motif: transaction.motif().map(ToString::to_string),
            transaction_date: transaction.transaction_date(),
            student_id: transaction.student_id().map(|id| *id.as_uuid()),
            payment_id: transaction.payment_id().map(|id| *id.as_uuid()),
            created_by: transaction.created_by().map(|id| *id.as_uuid()),
            created_at: transaction.created_at(),
            updated_at: transaction.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummaryDto {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub transactions_count: usize,
}

impl From<LedgerSummary> for LedgerSummaryDto {
    fn from(summary: LedgerSummary) -> Self {
        Self {
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            balance: summary.balance,
            transactions_count: summary.transactions_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_manual_expense_defaults_to_today() {
        let dto: CreateTransactionDto = serde_json::from_value(serde_json::json!({
            "type": "EXPENSE",
            "source": "MANUAL_EXPENSE",
            "amount": 350,
            "motif": "Fournitures"
        }))
        .unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        let author = UserId::new();
        let data = dto.into_data(today, author);
        assert_eq!(data.transaction_type, TransactionType::Expense);
        assert_eq!(data.amount, dec!(350));
        assert_eq!(data.transaction_date, today);
        assert_eq!(data.created_by, Some(author));
        assert!(data.payment_id.is_none());
    }
}
