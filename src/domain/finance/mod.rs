//! Finance Core
//!
//! Schedule generation, installment status derivation, payment allocation
//! and rollups. Everything here is pure: the current date is always passed
//! in as `today`.

pub mod allocation;
pub mod calendar;
pub mod ledger;
pub mod overdue;
pub mod rollups;
pub mod schedule;
pub mod status;
pub mod tracking;

pub use allocation::{allocate_payment, Allocation, AllocationPlan};
pub use calendar::{month_label, month_name};
pub use ledger::{FinanceStats, LedgerSummary};
pub use overdue::{OverdueItem, OverdueReport, StudentOverdue};
pub use rollups::{collection_rate, payment_alerts, upcoming, DueItem, ScheduleLine, ScheduleSummary};
pub use schedule::{course_schedule, plan_schedule, split_evenly, ScheduledInstallment};
pub use status::{days_overdue, days_remaining, derive_status, severity, Severity};
pub use tracking::{MonthEntry, MonthStatus, MonthlyTracking, StudentTracking};
