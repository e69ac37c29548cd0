//! Dashboard Use Cases

mod get_dashboard_stats;
mod get_payment_alerts;

pub use get_dashboard_stats::{DashboardDeps, DashboardStats, GetDashboardStatsUseCase};
pub use get_payment_alerts::{GetPaymentAlertsUseCase, DEFAULT_ALERT_DAYS};

pub struct DashboardUseCases {
    pub stats: GetDashboardStatsUseCase,
    pub payment_alerts: GetPaymentAlertsUseCase,
}

impl DashboardUseCases {
    #[must_use]
    pub fn new(deps: &DashboardDeps) -> Self {
        Self {
            stats: GetDashboardStatsUseCase::new(deps),
            payment_alerts: GetPaymentAlertsUseCase::new(deps.installments.clone(), deps.clock.clone()),
        }
    }
}
