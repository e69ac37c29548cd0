//! Get Upcoming Installments Use Case

use std::sync::Arc;

use crate::domain::finance::{upcoming, DueItem};
use crate::domain::gateways::{Clock, InstallmentRepository, ScheduleFilter};
use crate::shared::errors::UseCaseError;

/// Look-ahead window when none is given
pub const DEFAULT_UPCOMING_DAYS: i64 = 30;

pub struct GetUpcomingInstallmentsUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    clock: Arc<dyn Clock>,
}

impl GetUpcomingInstallmentsUseCase {
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
    /// Returns `UseCaseError::Validation` for a negative window.
    pub async fn execute(&self, days: Option<i64>) -> Result<Vec<DueItem>, UseCaseError> {
        let days = days.unwrap_or(DEFAULT_UPCOMING_DAYS);
        if days < 0 {
            return Err(UseCaseError::Validation(vec!["days: must not be negative".to_string()]));
        }
        let lines = self.installment_repository.find_lines(ScheduleFilter::default()).await?;
        Ok(upcoming(lines, self.clock.today(), days))
    }
}
