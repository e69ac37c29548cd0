//! List Schedules Use Case

use std::sync::Arc;

use crate::domain::finance::ScheduleLine;
use crate::domain::gateways::{Clock, InstallmentRepository, ScheduleFilter};
use crate::domain::models::installment::InstallmentStatus;
use crate::shared::errors::UseCaseError;

pub struct ListSchedulesUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    clock: Arc<dyn Clock>,
}

impl ListSchedulesUseCase {
    #[must_use]
    pub fn new(installment_repository: Arc<dyn InstallmentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            installment_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// `status` matches the status derived for today, not the stored one.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        filter: ScheduleFilter,
        status: Option<InstallmentStatus>,
    ) -> Result<Vec<ScheduleLine>, UseCaseError> {
        let today = self.clock.today();
        Ok(self
            .installment_repository
            .find_lines(filter)
            .await?
            .into_iter()
            .map(|mut line| {
                line.installment = line.installment.refresh_status(today);
                line
            })
            .filter(|line| status.map_or(true, |s| line.installment.status() == s))
            .collect())
    }
}
