//! Month-by-month payment tracking per student.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use rust_decimal::Decimal;

use super::calendar::month_label;
use super::rollups::{collection_rate, ScheduleLine};
use crate::domain::models::ids::StudentId;
use crate::domain::models::labels::labeled_enum;

labeled_enum!(
    /// Whether a student's month is fully paid
    MonthStatus {
        Paid => ("PAID", "Payé"),
        Unpaid => ("UNPAID", "Non payé"),
    }
);

/// Amounts due in one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthEntry {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub expected: Decimal,
    pub paid: Decimal,
    pub remaining: Decimal,
    pub status: MonthStatus,
}

/// Tracking rows for one student, months in calendar order
#[derive(Debug, Clone)]
pub struct StudentTracking {
    pub student_id: StudentId,
    pub student_name: String,
    pub months: Vec<MonthEntry>,
    pub total_expected: Decimal,
    pub total_paid: Decimal,
    pub total_remaining: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct MonthlyTracking {
    pub students: Vec<StudentTracking>,
    pub total_expected: Decimal,
    pub total_paid: Decimal,
    pub total_remaining: Decimal,
    pub collection_rate: u32,
}

#[derive(Default)]
struct Bucket {
    expected: Decimal,
    paid: Decimal,
}

impl MonthlyTracking {
    /// Group installments by student and due month
    ///
    /// Cancelled installments are left out. With `year`, only installments
    /// due in that calendar year are kept.
    #[must_use]
    pub fn build(lines: Vec<ScheduleLine>, year: Option<i32>) -> Self {
        let mut per_student: HashMap<StudentId, (String, BTreeMap<(i32, u32), Bucket>)> = HashMap::new();

        for line in lines {
            let installment = &line.installment;
            let due = installment.due_date();
            if installment.is_cancelled() || year.is_some_and(|y| y != due.year()) {
                continue;
            }
            let (_, months) = per_student
                .entry(line.student_id)
                .or_insert_with(|| (line.student_name.clone(), BTreeMap::new()));
            let bucket = months.entry((due.year(), due.month())).or_default();
            bucket.expected += installment.amount();
            bucket.paid += installment.paid_amount();
        }

        let mut students: Vec<StudentTracking> = per_student
            .into_iter()
            .map(|(student_id, (student_name, months))| {
                let months: Vec<MonthEntry> = months
                    .into_iter()
                    .map(|((year, month), bucket)| {
                        let remaining = (bucket.expected - bucket.paid).max(Decimal::ZERO);
                        MonthEntry {
                            year,
                            month,
                            label: month_label(year, month),
                            expected: bucket.expected,
                            paid: bucket.paid,
                            remaining,
                            status: if remaining.is_zero() {
                                MonthStatus::Paid
                            } else {
                                MonthStatus::Unpaid
                            },
                        }
                    })
                    .collect();
                StudentTracking {
                    student_id,
                    student_name,
                    total_expected: months.iter().map(|m| m.expected).sum(),
                    total_paid: months.iter().map(|m| m.paid).sum(),
                    total_remaining: months.iter().map(|m| m.remaining).sum(),
                    months,
                }
            })
            .collect();
        students.sort_by(|a, b| a.student_name.cmp(&b.student_name));

        let total_expected: Decimal = students.iter().map(|s| s.total_expected).sum();
        let total_paid: Decimal = students.iter().map(|s| s.total_paid).sum();
        Self {
            total_remaining: students.iter().map(|s| s.total_remaining).sum(),
            collection_rate: collection_rate(total_paid, total_expected),
            total_expected,
            total_paid,
            students,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::finance::rollups::tests::{date, installment, schedule_line};
    use rust_decimal_macros::dec;

    #[test]
    fn test_tracking_groups_by_student_and_month() {
        let amel = StudentId::new();
        let bilal = StudentId::new();
        let lines = vec![
            schedule_line(bilal, "Bilal", installment(1, dec!(2000), date(2025, 10, 5), dec!(2000))),
            schedule_line(amel, "Amel", installment(2, dec!(3000), date(2025, 11, 5), dec!(1000))),
            schedule_line(amel, "Amel", installment(1, dec!(3000), date(2025, 10, 5), dec!(3000))),
            schedule_line(amel, "Amel", installment(3, dec!(3000), date(2026, 1, 5), Decimal::ZERO)),
        ];

        let tracking = MonthlyTracking::build(lines, None);

        assert_eq!(tracking.students.len(), 2);
        let amel_row = &tracking.students[0];
        assert_eq!(amel_row.student_name, "Amel");
        assert_eq!(amel_row.months.len(), 3);
        assert_eq!(amel_row.months[0].label, "Octobre 2025");
        assert_eq!(amel_row.months[0].status, MonthStatus::Paid);
        assert_eq!(amel_row.months[1].remaining, dec!(2000));
        assert_eq!(amel_row.months[1].status, MonthStatus::Unpaid);
        assert_eq!(amel_row.months[2].year, 2026);
        assert_eq!(amel_row.total_remaining, dec!(5000));

        assert_eq!(tracking.total_expected, dec!(11000));
        assert_eq!(tracking.total_paid, dec!(6000));
        assert_eq!(tracking.collection_rate, 55);
    }

    #[test]
    fn test_tracking_year_filter() {
        let amel = StudentId::new();
        let lines = vec![
            schedule_line(amel, "Amel", installment(1, dec!(3000), date(2025, 12, 5), Decimal::ZERO)),
            schedule_line(amel, "Amel", installment(2, dec!(3000), date(2026, 1, 5), Decimal::ZERO)),
        ];

        let tracking = MonthlyTracking::build(lines, Some(2026));
        assert_eq!(tracking.students[0].months.len(), 1);
        assert_eq!(tracking.total_expected, dec!(3000));
    }
}
