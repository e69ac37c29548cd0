//! Get Overdue Report Use Case

use std::sync::Arc;

use crate::domain::finance::OverdueReport;
use crate::domain::gateways::{Clock, InstallmentRepository, ScheduleFilter};
use crate::shared::errors::UseCaseError;

pub struct GetOverdueReportUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    clock: Arc<dyn Clock>,
}

impl GetOverdueReportUseCase {
    #[must_use]
    pub fn new(installment_repository: Arc<dyn InstallmentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            installment_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<OverdueReport, UseCaseError> {
        let lines = self.installment_repository.find_lines(ScheduleFilter::default()).await?;
        let report = OverdueReport::build(lines, self.clock.today());
        tracing::debug!(
            overdue = report.total_count,
            critical = report.critical_count,
            "Overdue report built"
        );
        Ok(report)
    }
}
