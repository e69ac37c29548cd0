//! Get Transaction By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::TransactionRepository;
use crate::domain::models::ids::TransactionId;
use crate::domain::models::transaction::Transaction;
use crate::shared::errors::UseCaseError;

pub struct GetTransactionByIdUseCase {
    transaction_repository: Arc<dyn TransactionRepository>,
}

impl GetTransactionByIdUseCase {
    #[must_use]
    pub fn new(transaction_repository: Arc<dyn TransactionRepository>) -> Self {
        Self { transaction_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the transaction doesn't exist.
    pub async fn execute(&self, id: &TransactionId) -> Result<Transaction, UseCaseError> {
        self.transaction_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Transaction", id))
    }
}
