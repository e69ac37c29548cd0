//! Installment status derivation and due-date arithmetic.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::models::installment::InstallmentStatus;
use crate::domain::models::labels::labeled_enum;

/// Days past due after which an overdue installment is critical
pub const CRITICAL_AFTER_DAYS: i64 = 30;

labeled_enum!(
    /// Urgency of an overdue installment
    Severity {
        Warning => ("WARNING", "Avertissement"),
        Critical => ("CRITICAL", "Critique"),
    }
);

/// Status of an installment given its amounts and due date on `today`
///
/// Precedence: cancelled, paid, overdue (partially paid included),
/// partial, pending.
#[must_use]
pub fn derive_status(
    amount: Decimal,
    paid_amount: Decimal,
    due_date: NaiveDate,
    cancelled: bool,
    today: NaiveDate,
) -> InstallmentStatus {
    if cancelled {
        InstallmentStatus::Cancelled
    } else if paid_amount >= amount {
        InstallmentStatus::Paid
    } else if due_date < today {
        InstallmentStatus::Overdue
    } else if paid_amount > Decimal::ZERO {
        InstallmentStatus::Partial
    } else {
        InstallmentStatus::Pending
    }
}

/// Whole days past `due_date`, zero when not yet due
#[must_use]
pub fn days_overdue(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - due_date).num_days().max(0)
}

/// Signed days until `due_date`; negative once past due
#[must_use]
pub fn days_remaining(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Severity for a number of days overdue
#[must_use]
pub fn severity(days_overdue: i64) -> Severity {
    if days_overdue > CRITICAL_AFTER_DAYS {
        Severity::Critical
    } else {
        Severity::Warning
    }
}
