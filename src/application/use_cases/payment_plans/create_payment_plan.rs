//! Create Payment Plan Use Case

use std::sync::Arc;

use crate::domain::gateways::PaymentPlanRepository;
use crate::domain::models::payment_plan::{CreatePaymentPlanData, PaymentPlan};
use crate::shared::errors::UseCaseError;

pub struct CreatePaymentPlanUseCase {
    payment_plan_repository: Arc<dyn PaymentPlanRepository>,
}

impl CreatePaymentPlanUseCase {
    #[must_use]
    pub fn new(payment_plan_repository: Arc<dyn PaymentPlanRepository>) -> Self {
        Self { payment_plan_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` on a blank name or a count/interval below one.
    pub async fn execute(&self, data: CreatePaymentPlanData) -> Result<PaymentPlan, UseCaseError> {
        tracing::info!(name = %data.name, installments = data.installments_count, "Creating payment plan");

        let plan = PaymentPlan::new(data)?;
        Ok(self.payment_plan_repository.create(&plan).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::payment_plan_repository::MockPaymentPlanRepository;

    #[tokio::test]
    async fn should_reject_zero_installments() {
        let mut repo = MockPaymentPlanRepository::new();
        repo.expect_create().never();

        let result = CreatePaymentPlanUseCase::new(Arc::new(repo))
            .execute(CreatePaymentPlanData {
                name: "Comptant".into(),
                installments_count: 0,
                interval_days: 30,
                description: None,
            })
            .await;

        assert!(matches!(result, Err(UseCaseError::Domain(_))));
    }
}
