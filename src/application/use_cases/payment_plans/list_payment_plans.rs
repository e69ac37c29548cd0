//! List Payment Plans Use Case

use std::sync::Arc;

use crate::domain::gateways::PaymentPlanRepository;
use crate::domain::models::payment_plan::PaymentPlan;
use crate::shared::errors::UseCaseError;

pub struct ListPaymentPlansUseCase {
    payment_plan_repository: Arc<dyn PaymentPlanRepository>,
}

impl ListPaymentPlansUseCase {
    #[must_use]
    pub fn new(payment_plan_repository: Arc<dyn PaymentPlanRepository>) -> Self {
        Self { payment_plan_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<PaymentPlan>, UseCaseError> {
        Ok(self.payment_plan_repository.find_all().await?)
    }
}
