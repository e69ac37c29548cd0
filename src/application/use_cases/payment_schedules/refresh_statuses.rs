//! Refresh Statuses Use Case

use std::sync::Arc;

use crate::domain::gateways::{Clock, InstallmentRepository, ScheduleFilter};
use crate::shared::errors::UseCaseError;

/// Persists the status every installment has today
pub struct RefreshStatusesUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    clock: Arc<dyn Clock>,
}

impl RefreshStatusesUseCase {
    #[must_use]
    pub fn new(installment_repository: Arc<dyn InstallmentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            installment_repository,
            clock,
        }
    }

    /// Execute the use case, returning how many rows changed
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<u64, UseCaseError> {
        let today = self.clock.today();
        let stale: Vec<_> = self
            .installment_repository
            .find_lines(ScheduleFilter::default())
            .await?
            .into_iter()
            .map(|line| line.installment)
            .filter(|i| i.derived_status(today) != i.status())
            .map(|i| i.refresh_status(today))
            .collect();
        if stale.is_empty() {
            return Ok(0);
        }

        let updated = self.installment_repository.update_statuses(stale).await?;
        tracing::info!(updated, "Installment statuses refreshed");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures;
    use crate::domain::finance::{ScheduleLine, ScheduledInstallment};
    use crate::domain::gateways::installment_repository::MockInstallmentRepository;
    use crate::domain::models::ids::{CourseId, EnrollmentId, StudentId};
    use crate::domain::models::installment::{Installment, InstallmentStatus};
    use rust_decimal_macros::dec;

    fn line(due: chrono::NaiveDate) -> ScheduleLine {
        ScheduleLine {
            installment: Installment::new(
                EnrollmentId::new(),
                ScheduledInstallment {
                    number: 1,
                    amount: dec!(800),
                    due_date: due,
                    notes: None,
                },
                fixtures::date(2025, 9, 1),
            )
            .unwrap(),
            student_id: StudentId::new(),
            student_name: "Amel Benali".into(),
            course_id: CourseId::new(),
            course_title: "Anglais".into(),
        }
    }

    #[tokio::test]
    async fn only_changed_rows_are_written() {
        let lines = vec![line(fixtures::date(2025, 10, 5)), line(fixtures::date(2025, 12, 5))];
        let mut repo = MockInstallmentRepository::new();
        repo.expect_find_lines().returning(move |_| Ok(lines.clone()));
        repo.expect_update_statuses()
            .times(1)
            .withf(|rows| rows.len() == 1 && rows[0].status() == InstallmentStatus::Overdue)
            .returning(|rows| Ok(rows.len() as u64));

        let updated = RefreshStatusesUseCase::new(Arc::new(repo), Arc::new(fixtures::clock()))
            .execute()
            .await
            .unwrap();

        assert_eq!(updated, 1);
    }
}
