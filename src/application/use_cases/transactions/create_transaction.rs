//! Create Transaction Use Case

use std::sync::Arc;

use crate::domain::gateways::TransactionRepository;
use crate::domain::models::transaction::{CreateTransactionData, Transaction, TransactionSource};
use crate::shared::errors::UseCaseError;

/// Use case for entering a ledger line by hand
pub struct CreateTransactionUseCase {
    transaction_repository: Arc<dyn TransactionRepository>,
}

impl CreateTransactionUseCase {
    #[must_use]
    pub fn new(transaction_repository: Arc<dyn TransactionRepository>) -> Self {
        Self { transaction_repository }
    }

    /// Execute the use case
    ///
    /// Installment income is only ever written by payment recording.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for the `PAYMENT_INSTALLMENT` source.
    /// Returns `UseCaseError::Domain` if the amount is not positive or the
    /// source does not match the type.
    pub async fn execute(&self, data: CreateTransactionData) -> Result<Transaction, UseCaseError> {
        tracing::info!(
            transaction_type = %data.transaction_type,
            source = %data.source,
            amount = %data.amount,
            "Creating ledger transaction"
        );

        if data.source == TransactionSource::PaymentInstallment {
            return Err(UseCaseError::Validation(vec![
                "source: installment payments are recorded through the payment schedule".to_string(),
            ]));
        }
        let transaction = Transaction::new(data)?;
        let created = self.transaction_repository.create(&transaction).await?;

        tracing::info!(transaction_id = %created.id(), "Ledger transaction created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures;
    use crate::domain::gateways::transaction_repository::MockTransactionRepository;
    use crate::domain::models::transaction::TransactionType;
    use rust_decimal_macros::dec;

    fn data(transaction_type: TransactionType, source: TransactionSource) -> CreateTransactionData {
        CreateTransactionData {
            transaction_type,
            source,
            amount: dec!(4200),
            description: Some("Loyer local".into()),
            motif: Some("Loyer".into()),
            transaction_date: fixtures::date(2025, 11, 1),
            student_id: None,
            payment_id: None,
            created_by: None,
        }
    }

    #[tokio::test]
    async fn should_record_manual_expense() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_create().times(1).returning(|t| Ok(t.clone()));

        let created = CreateTransactionUseCase::new(Arc::new(repo))
            .execute(data(TransactionType::Expense, TransactionSource::ManualExpense))
            .await
            .unwrap();

        assert_eq!(created.signed_amount(), dec!(-4200));
    }

    #[tokio::test]
    async fn should_refuse_installment_source() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_create().never();

        let result = CreateTransactionUseCase::new(Arc::new(repo))
            .execute(data(TransactionType::Income, TransactionSource::PaymentInstallment))
            .await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }

    #[tokio::test]
    async fn should_refuse_mismatched_type() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_create().never();

        let result = CreateTransactionUseCase::new(Arc::new(repo))
            .execute(data(TransactionType::Income, TransactionSource::ManualExpense))
            .await;

        assert!(matches!(result, Err(UseCaseError::Domain(_))));
    }
}
