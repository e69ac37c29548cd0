//! Get Payment Plan By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::PaymentPlanRepository;
use crate::domain::models::ids::PaymentPlanId;
use crate::domain::models::payment_plan::PaymentPlan;
use crate::shared::errors::UseCaseError;

pub struct GetPaymentPlanByIdUseCase {
    payment_plan_repository: Arc<dyn PaymentPlanRepository>,
}

impl GetPaymentPlanByIdUseCase {
    #[must_use]
    pub fn new(payment_plan_repository: Arc<dyn PaymentPlanRepository>) -> Self {
        Self { payment_plan_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the plan doesn't exist.
    pub async fn execute(&self, id: &PaymentPlanId) -> Result<PaymentPlan, UseCaseError> {
        self.payment_plan_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("PaymentPlan", id))
    }
}
