//! List Transactions Use Case

use std::sync::Arc;

use crate::domain::gateways::{TransactionFilter, TransactionRepository};
use crate::domain::models::transaction::Transaction;
use crate::shared::errors::UseCaseError;

pub struct ListTransactionsUseCase {
    transaction_repository: Arc<dyn TransactionRepository>,
}

impl ListTransactionsUseCase {
    #[must_use]
    pub fn new(transaction_repository: Arc<dyn TransactionRepository>) -> Self {
        Self { transaction_repository }
    }

    /// Execute the use case, most recent first
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if `from` is after `to`.
    pub async fn execute(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, UseCaseError> {
        check_range(&filter)?;
        Ok(self.transaction_repository.find_all(filter).await?)
    }
}

pub(super) fn check_range(filter: &TransactionFilter) -> Result<(), UseCaseError> {
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from > to {
            return Err(UseCaseError::Validation(vec![
                "from: must not be after to".to_string(),
            ]));
        }
    }
    Ok(())
}
