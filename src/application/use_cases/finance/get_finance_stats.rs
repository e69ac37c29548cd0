//! Get Finance Stats Use Case

use std::sync::Arc;

use crate::domain::finance::FinanceStats;
use crate::domain::gateways::{Clock, InstallmentRepository, ScheduleFilter, TransactionFilter, TransactionRepository};
use crate::shared::errors::UseCaseError;

pub struct GetFinanceStatsUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    transaction_repository: Arc<dyn TransactionRepository>,
    clock: Arc<dyn Clock>,
}

impl GetFinanceStatsUseCase {
    #[must_use]
    pub fn new(
        installment_repository: Arc<dyn InstallmentRepository>,
        transaction_repository: Arc<dyn TransactionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            installment_repository,
            transaction_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<FinanceStats, UseCaseError> {
        let lines = self.installment_repository.find_lines(ScheduleFilter::default()).await?;
        let transactions = self.transaction_repository.find_all(TransactionFilter::default()).await?;
        Ok(FinanceStats::build(lines, &transactions, self.clock.today()))
    }
}
