//! Get Installment Payments Use Case

use std::sync::Arc;

use crate::domain::gateways::{InstallmentRepository, PaymentRepository};
use crate::domain::models::ids::InstallmentId;
use crate::domain::models::payment::Payment;
use crate::shared::errors::UseCaseError;

pub struct GetInstallmentPaymentsUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
}

impl GetInstallmentPaymentsUseCase {
    #[must_use]
    pub fn new(
        installment_repository: Arc<dyn InstallmentRepository>,
        payment_repository: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            installment_repository,
            payment_repository,
        }
    }

    /// Execute the use case, most recent payment first
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the installment doesn't exist.
    pub async fn execute(&self, id: &InstallmentId) -> Result<Vec<Payment>, UseCaseError> {
        if self.installment_repository.find_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found("Installment", id));
        }
        Ok(self.payment_repository.find_by_installment(id).await?)
    }
}
