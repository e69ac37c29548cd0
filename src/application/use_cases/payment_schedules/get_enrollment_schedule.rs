//! Get Enrollment Schedule Use Case

use std::sync::Arc;

use crate::domain::finance::ScheduleSummary;
use crate::domain::gateways::{Clock, InstallmentRepository};
use crate::domain::models::ids::EnrollmentId;
use crate::domain::models::installment::Installment;
use crate::shared::errors::UseCaseError;

/// Installments of one enrollment with their totals
#[derive(Debug, Clone)]
pub struct EnrollmentSchedule {
    pub enrollment_id: EnrollmentId,
    pub installments: Vec<Installment>,
    pub summary: ScheduleSummary,
}

pub struct GetEnrollmentScheduleUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    clock: Arc<dyn Clock>,
}

impl GetEnrollmentScheduleUseCase {
    #[must_use]
    pub fn new(installment_repository: Arc<dyn InstallmentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            installment_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// Statuses are derived for today.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` when the enrollment has no schedule.
    pub async fn execute(&self, enrollment_id: &EnrollmentId) -> Result<EnrollmentSchedule, UseCaseError> {
        let today = self.clock.today();
        let installments: Vec<Installment> = self
            .installment_repository
            .find_by_enrollment(enrollment_id)
            .await?
            .into_iter()
            .map(|i| i.refresh_status(today))
            .collect();
        if installments.is_empty() {
            return Err(UseCaseError::not_found("PaymentSchedule", enrollment_id));
        }

        Ok(EnrollmentSchedule {
            enrollment_id: *enrollment_id,
            summary: ScheduleSummary::from_installments(&installments, today),
            installments,
        })
    }
}
