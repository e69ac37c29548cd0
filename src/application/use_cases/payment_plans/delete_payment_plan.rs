//! Delete Payment Plan Use Case

use std::sync::Arc;

use crate::domain::gateways::PaymentPlanRepository;
use crate::domain::models::ids::PaymentPlanId;
use crate::shared::errors::UseCaseError;

pub struct DeletePaymentPlanUseCase {
    payment_plan_repository: Arc<dyn PaymentPlanRepository>,
}

impl DeletePaymentPlanUseCase {
    #[must_use]
    pub fn new(payment_plan_repository: Arc<dyn PaymentPlanRepository>) -> Self {
        Self { payment_plan_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the plan doesn't exist.
    pub async fn execute(&self, id: &PaymentPlanId) -> Result<(), UseCaseError> {
        tracing::info!(payment_plan_id = %id, "Deleting payment plan");

        if !self.payment_plan_repository.delete(id).await? {
            return Err(UseCaseError::not_found("PaymentPlan", id));
        }
        Ok(())
    }
}
