//! Get Transaction Summary Use Case

use std::sync::Arc;

use chrono::NaiveDate;

use super::list_transactions::check_range;
use crate::domain::finance::LedgerSummary;
use crate::domain::gateways::{TransactionFilter, TransactionRepository};
use crate::shared::errors::UseCaseError;

pub struct GetTransactionSummaryUseCase {
    transaction_repository: Arc<dyn TransactionRepository>,
}

impl GetTransactionSummaryUseCase {
    #[must_use]
    pub fn new(transaction_repository: Arc<dyn TransactionRepository>) -> Self {
        Self { transaction_repository }
    }

    /// Execute the use case over an optional date range, both ends included
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if `from` is after `to`.
    pub async fn execute(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<LedgerSummary, UseCaseError> {
        let filter = TransactionFilter {
            from,
            to,
            ..Default::default()
        };
        check_range(&filter)?;
        let transactions = self.transaction_repository.find_all(filter).await?;
        Ok(LedgerSummary::from_transactions(&transactions))
    }
}
