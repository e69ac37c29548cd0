//! Get Payment Alerts Use Case

use std::sync::Arc;

use crate::domain::finance::{payment_alerts, DueItem};
use crate::domain::gateways::{Clock, InstallmentRepository, ScheduleFilter};
use crate::shared::errors::UseCaseError;

/// Look-ahead window when none is given
pub const DEFAULT_ALERT_DAYS: i64 = 7;

pub struct GetPaymentAlertsUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    clock: Arc<dyn Clock>,
}

impl GetPaymentAlertsUseCase {
    #[must_use]
    pub fn new(installment_repository: Arc<dyn InstallmentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            installment_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// Overdue installments are always included.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for a negative window.
    pub async fn execute(&self, days: Option<i64>) -> Result<Vec<DueItem>, UseCaseError> {
        let days = days.unwrap_or(DEFAULT_ALERT_DAYS);
        if days < 0 {
            return Err(UseCaseError::Validation(vec!["days: must not be negative".to_string()]));
        }
        let lines = self.installment_repository.find_lines(ScheduleFilter::default()).await?;
        Ok(payment_alerts(lines, self.clock.today(), days))
    }
}
