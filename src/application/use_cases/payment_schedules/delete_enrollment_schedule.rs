//! Delete Enrollment Schedule Use Case

use std::sync::Arc;

use crate::domain::gateways::{InstallmentRepository, PaymentRepository};
use crate::domain::models::ids::EnrollmentId;
use crate::shared::errors::UseCaseError;

pub struct DeleteEnrollmentScheduleUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
}

impl DeleteEnrollmentScheduleUseCase {
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

    /// Execute the use case, returning the number of installments removed
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` once any payment was recorded on the enrollment.
    /// Returns `UseCaseError::NotFound` when there is no schedule.
    pub async fn execute(&self, enrollment_id: &EnrollmentId) -> Result<u64, UseCaseError> {
        tracing::info!(enrollment_id = %enrollment_id, "Deleting payment schedule");

        if self.payment_repository.count_by_enrollment(enrollment_id).await? > 0 {
            return Err(UseCaseError::Conflict(
                "payments were already recorded on this schedule".to_string(),
            ));
        }
        let deleted = self.installment_repository.delete_by_enrollment(enrollment_id).await?;
        if deleted == 0 {
            return Err(UseCaseError::not_found("PaymentSchedule", enrollment_id));
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::installment_repository::MockInstallmentRepository;
    use crate::domain::gateways::payment_repository::MockPaymentRepository;

    #[tokio::test]
    async fn should_refuse_when_payments_exist() {
        let mut payments = MockPaymentRepository::new();
        payments.expect_count_by_enrollment().returning(|_| Ok(2));
        let mut installments = MockInstallmentRepository::new();
        installments.expect_delete_by_enrollment().never();

        let result = DeleteEnrollmentScheduleUseCase::new(Arc::new(installments), Arc::new(payments))
            .execute(&EnrollmentId::new())
            .await;

        assert!(matches!(result, Err(UseCaseError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_delete_unpaid_schedule() {
        let mut payments = MockPaymentRepository::new();
        payments.expect_count_by_enrollment().returning(|_| Ok(0));
        let mut installments = MockInstallmentRepository::new();
        installments.expect_delete_by_enrollment().returning(|_| Ok(10));

        let deleted = DeleteEnrollmentScheduleUseCase::new(Arc::new(installments), Arc::new(payments))
            .execute(&EnrollmentId::new())
            .await
            .unwrap();

        assert_eq!(deleted, 10);
    }
}
