//! Update Installment Use Case

use std::sync::Arc;

use crate::domain::gateways::{Clock, InstallmentRepository};
use crate::domain::models::ids::InstallmentId;
use crate::domain::models::installment::{Installment, UpdateInstallmentData};
use crate::shared::errors::UseCaseError;

pub struct UpdateInstallmentUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateInstallmentUseCase {
    #[must_use]
    pub fn new(installment_repository: Arc<dyn InstallmentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            installment_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// Cancelling is permanent.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the installment doesn't exist.
    /// Returns `UseCaseError::Domain` if the new amount is below what was already paid.
    pub async fn execute(&self, id: &InstallmentId, data: UpdateInstallmentData) -> Result<Installment, UseCaseError> {
        tracing::info!(installment_id = %id, cancel = data.cancel, "Updating installment");

        let updated = self
            .installment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Installment", id))?
            .with_updates(data, self.clock.today())?;
        self.installment_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Installment", id))
    }
}
