//! Delete Transaction Use Case

use std::sync::Arc;

use crate::domain::gateways::TransactionRepository;
use crate::domain::models::ids::TransactionId;
use crate::shared::errors::UseCaseError;

pub struct DeleteTransactionUseCase {
    transaction_repository: Arc<dyn TransactionRepository>,
}

impl DeleteTransactionUseCase {
    #[must_use]
    pub fn new(transaction_repository: Arc<dyn TransactionRepository>) -> Self {
        Self { transaction_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the transaction doesn't exist.
    pub async fn execute(&self, id: &TransactionId) -> Result<(), UseCaseError> {
        tracing::info!(transaction_id = %id, "Deleting ledger transaction");

        if !self.transaction_repository.delete(id).await? {
            return Err(UseCaseError::not_found("Transaction", id));
        }
        Ok(())
    }
}
