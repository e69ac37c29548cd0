//! Get Monthly Tracking Use Case

use std::sync::Arc;

use crate::domain::finance::MonthlyTracking;
use crate::domain::gateways::{InstallmentRepository, ScheduleFilter};
use crate::domain::models::ids::CourseId;
use crate::shared::errors::UseCaseError;

pub struct GetMonthlyTrackingUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
}

impl GetMonthlyTrackingUseCase {
    #[must_use]
    pub fn new(installment_repository: Arc<dyn InstallmentRepository>) -> Self {
        Self { installment_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, year: Option<i32>, course_id: Option<CourseId>) -> Result<MonthlyTracking, UseCaseError> {
        let lines = self
            .installment_repository
            .find_lines(ScheduleFilter {
                course_id,
                ..Default::default()
            })
            .await?;
        Ok(MonthlyTracking::build(lines, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::installment_repository::MockInstallmentRepository;

    #[tokio::test]
    async fn course_filter_reaches_repository() {
        let course_id = CourseId::new();
        let mut repo = MockInstallmentRepository::new();
        repo.expect_find_lines()
            .times(1)
            .withf(move |f| f.course_id == Some(course_id) && f.student_id.is_none())
            .returning(|_| Ok(Vec::new()));

        let tracking = GetMonthlyTrackingUseCase::new(Arc::new(repo))
            .execute(Some(2025), Some(course_id))
            .await
            .unwrap();

        assert!(tracking.students.is_empty());
        assert_eq!(tracking.collection_rate, 0);
    }
}
