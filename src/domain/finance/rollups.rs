//! Aggregates over sets of installments: schedule summaries and the
//! upcoming / alert views.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::status::{days_remaining, severity, Severity};
use crate::domain::models::ids::{CourseId, StudentId};
use crate::domain::models::installment::{Installment, InstallmentStatus};

/// An installment together with who owes it and for what
#[derive(Debug, Clone)]
pub struct ScheduleLine {
    pub installment: Installment,
    pub student_id: StudentId,
    pub student_name: String,
    pub course_id: CourseId,
    pub course_title: String,
}

/// Integer percentage of `paid` over `total`, 0 when nothing is due
#[must_use]
pub fn collection_rate(paid: Decimal, total: Decimal) -> u32 {
    if total <= Decimal::ZERO {
        return 0;
    }
    (paid / total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Totals and status counts for a schedule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
    pub installments_count: usize,
    pub paid_count: usize,
    pub partial_count: usize,
    pub pending_count: usize,
    pub overdue_count: usize,
    pub cancelled_count: usize,
    pub collection_rate: u32,
}

impl ScheduleSummary {
    /// Summarize installments using their status on `today`
    ///
    /// Cancelled installments are counted but excluded from every amount.
    #[must_use]
    pub fn from_installments<'a, I>(installments: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Installment>,
    {
        let mut summary = Self::default();
        for installment in installments {
            summary.installments_count += 1;
            match installment.derived_status(today) {
                InstallmentStatus::Cancelled => {
                    summary.cancelled_count += 1;
                    continue;
                }
                InstallmentStatus::Paid => summary.paid_count += 1,
                InstallmentStatus::Partial => summary.partial_count += 1,
                InstallmentStatus::Pending => summary.pending_count += 1,
                InstallmentStatus::Overdue => summary.overdue_count += 1,
            }
            summary.total_amount += installment.amount();
            summary.paid_amount += installment.paid_amount();
            summary.remaining_amount += installment.remaining_amount();
        }
        summary.collection_rate = collection_rate(summary.paid_amount, summary.total_amount);
        summary
    }
}

/// An open installment with its distance to the due date
#[derive(Debug, Clone)]
pub struct DueItem {
    pub line: ScheduleLine,
    /// Negative once past due
    pub days_remaining: i64,
    pub remaining_amount: Decimal,
    /// Set for installments already past due
    pub severity: Option<Severity>,
}

fn open_lines(lines: Vec<ScheduleLine>) -> impl Iterator<Item = ScheduleLine> {
    lines.into_iter().filter(|l| l.installment.accepts_payment())
}

fn due_item(line: ScheduleLine, today: NaiveDate) -> DueItem {
    let days = days_remaining(line.installment.due_date(), today);
    DueItem {
        remaining_amount: line.installment.remaining_amount(),
        severity: (days < 0).then(|| severity(-days)),
        days_remaining: days,
        line,
    }
}

fn sorted(mut items: Vec<DueItem>) -> Vec<DueItem> {
    items.sort_by_key(|i| (i.line.installment.due_date(), i.line.installment.installment_number()));
    items
}

/// Open installments due between `today` and `today + days`, both included
#[must_use]
pub fn upcoming(lines: Vec<ScheduleLine>, today: NaiveDate, days: i64) -> Vec<DueItem> {
    sorted(
        open_lines(lines)
            .map(|l| due_item(l, today))
            .filter(|i| (0..=days).contains(&i.days_remaining))
            .collect(),
    )
}

/// Open installments due by `today + days`, overdue ones included
#[must_use]
pub fn payment_alerts(lines: Vec<ScheduleLine>, today: NaiveDate, days: i64) -> Vec<DueItem> {
    sorted(
        open_lines(lines)
            .map(|l| due_item(l, today))
            .filter(|i| i.days_remaining <= days)
            .collect(),
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::finance::ScheduledInstallment;
    use crate::domain::models::ids::EnrollmentId;
    use crate::domain::models::installment::UpdateInstallmentData;
    use crate::domain::models::payment::PaymentMethod;
    use rust_decimal_macros::dec;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn today() -> NaiveDate {
        date(2025, 11, 10)
    }

    pub(crate) fn installment(number: i32, amount: Decimal, due: NaiveDate, paid: Decimal) -> Installment {
        let item = Installment::new(
            EnrollmentId::new(),
            ScheduledInstallment {
                number,
                amount,
                due_date: due,
                notes: None,
            },
            today(),
        )
        .unwrap();
        if paid > Decimal::ZERO {
            item.apply_payment(paid, PaymentMethod::Cash, today(), today()).unwrap()
        } else {
            item
        }
    }

    pub(crate) fn schedule_line(student_id: StudentId, name: &str, installment: Installment) -> ScheduleLine {
        ScheduleLine {
            installment,
            student_id,
            student_name: name.to_string(),
            course_id: CourseId::new(),
            course_title: "Anglais".to_string(),
        }
    }

    #[test]
    fn test_collection_rate() {
        assert_eq!(collection_rate(dec!(1), dec!(3)), 33);
        assert_eq!(collection_rate(dec!(1), dec!(8)), 13);
        assert_eq!(collection_rate(dec!(5), dec!(5)), 100);
        assert_eq!(collection_rate(dec!(0), dec!(0)), 0);
    }

    #[test]
    fn test_summary_counts_and_amounts() {
        let cancelled = installment(5, dec!(1000), date(2025, 9, 5), Decimal::ZERO)
            .with_updates(
                UpdateInstallmentData {
                    cancel: true,
                    ..Default::default()
                },
                today(),
            )
            .unwrap();
        let items = vec![
            installment(1, dec!(1000), date(2025, 10, 5), dec!(1000)),
            installment(2, dec!(1000), date(2025, 11, 5), dec!(400)),
            installment(3, dec!(1000), date(2025, 12, 5), dec!(250)),
            installment(4, dec!(1000), date(2026, 1, 5), Decimal::ZERO),
            cancelled,
        ];

        let summary = ScheduleSummary::from_installments(&items, today());

        assert_eq!(summary.installments_count, 5);
        assert_eq!(summary.paid_count, 1);
        assert_eq!(summary.overdue_count, 1);
        assert_eq!(summary.partial_count, 1);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.cancelled_count, 1);
        assert_eq!(summary.total_amount, dec!(4000));
        assert_eq!(summary.paid_amount, dec!(1650));
        assert_eq!(summary.remaining_amount, dec!(2350));
        assert_eq!(summary.collection_rate, 41);
    }

    #[test]
    fn test_summary_of_nothing_is_zero() {
        let summary = ScheduleSummary::from_installments(&[], today());
        assert_eq!(summary, ScheduleSummary::default());
    }

    #[test]
    fn test_upcoming_window() {
        let student = StudentId::new();
        let lines = vec![
            schedule_line(student, "A", installment(1, dec!(100), date(2025, 11, 5), Decimal::ZERO)),
            schedule_line(student, "A", installment(2, dec!(100), date(2025, 11, 10), Decimal::ZERO)),
            schedule_line(student, "A", installment(3, dec!(100), date(2025, 12, 10), Decimal::ZERO)),
            schedule_line(student, "A", installment(4, dec!(100), date(2025, 12, 11), Decimal::ZERO)),
            schedule_line(student, "A", installment(5, dec!(100), date(2025, 11, 20), dec!(100))),
        ];

        let items = upcoming(lines, today(), 30);

        let numbers: Vec<i32> = items.iter().map(|i| i.line.installment.installment_number()).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert_eq!(items[1].days_remaining, 30);
        assert!(items.iter().all(|i| i.severity.is_none()));
    }

    #[test]
    fn test_alerts_include_overdue() {
        let student = StudentId::new();
        let lines = vec![
            schedule_line(student, "A", installment(2, dec!(100), date(2025, 11, 15), Decimal::ZERO)),
            schedule_line(student, "A", installment(1, dec!(100), date(2025, 9, 5), dec!(20))),
            schedule_line(student, "A", installment(3, dec!(100), date(2025, 11, 30), Decimal::ZERO)),
        ];

        let alerts = payment_alerts(lines, today(), 7);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].days_remaining, -66);
        assert_eq!(alerts[0].severity, Some(Severity::Critical));
        assert_eq!(alerts[0].remaining_amount, dec!(80));
        assert_eq!(alerts[1].days_remaining, 5);
    }
}
