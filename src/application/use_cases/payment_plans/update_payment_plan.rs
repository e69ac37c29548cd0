//! Update Payment Plan Use Case

use std::sync::Arc;

use crate::domain::gateways::PaymentPlanRepository;
use crate::domain::models::ids::PaymentPlanId;
use crate::domain::models::payment_plan::{PaymentPlan, UpdatePaymentPlanData};
use crate::shared::errors::UseCaseError;

pub struct UpdatePaymentPlanUseCase {
    payment_plan_repository: Arc<dyn PaymentPlanRepository>,
}

impl UpdatePaymentPlanUseCase {
    #[must_use]
    pub fn new(payment_plan_repository: Arc<dyn PaymentPlanRepository>) -> Self {
        Self { payment_plan_repository }
    }

    /// Execute the use case
    ///
    /// Existing schedules are not regenerated.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the plan doesn't exist.
    pub async fn execute(&self, id: &PaymentPlanId, data: UpdatePaymentPlanData) -> Result<PaymentPlan, UseCaseError> {
        tracing::info!(payment_plan_id = %id, "Updating payment plan");

        let updated = self
            .payment_plan_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("PaymentPlan", id))?
            .with_updates(data)?;
        self.payment_plan_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("PaymentPlan", id))
    }
}
