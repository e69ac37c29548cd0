//! Finance Report Use Cases

mod get_finance_stats;
mod get_monthly_tracking;

use std::sync::Arc;

pub use get_finance_stats::GetFinanceStatsUseCase;
pub use get_monthly_tracking::GetMonthlyTrackingUseCase;

use crate::domain::gateways::{Clock, InstallmentRepository, TransactionRepository};

pub struct FinanceUseCases {
    pub monthly_tracking: GetMonthlyTrackingUseCase,
    pub stats: GetFinanceStatsUseCase,
}

impl FinanceUseCases {
    #[must_use]
    pub fn new(
        installments: &Arc<dyn InstallmentRepository>,
        transactions: &Arc<dyn TransactionRepository>,
        clock: &Arc<dyn Clock>,
    ) -> Self {
        Self {
            monthly_tracking: GetMonthlyTrackingUseCase::new(installments.clone()),
            stats: GetFinanceStatsUseCase::new(installments.clone(), transactions.clone(), clock.clone()),
        }
    }
}
