//! Overdue installment report.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::rollups::ScheduleLine;
use super::status::{days_overdue, severity, Severity};
use crate::domain::models::ids::StudentId;
use crate::domain::models::installment::InstallmentStatus;

/// One overdue installment
#[derive(Debug, Clone)]
pub struct OverdueItem {
    pub line: ScheduleLine,
    pub days_overdue: i64,
    pub severity: Severity,
    pub remaining_amount: Decimal,
}

/// Overdue totals for one student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentOverdue {
    pub student_id: StudentId,
    pub student_name: String,
    pub overdue_count: usize,
    pub total_remaining: Decimal,
    pub max_days_overdue: i64,
}

/// Every overdue installment on a given day, with totals
#[derive(Debug, Clone, Default)]
pub struct OverdueReport {
    /// Most overdue first
    pub items: Vec<OverdueItem>,
    pub total_count: usize,
    pub total_remaining: Decimal,
    pub critical_count: usize,
    pub average_days_overdue: i64,
    /// Largest debt first
    pub by_student: Vec<StudentOverdue>,
}

impl OverdueReport {
    /// Build the report from schedule lines as of `today`
    #[must_use]
    pub fn build(lines: Vec<ScheduleLine>, today: NaiveDate) -> Self {
        let mut items: Vec<OverdueItem> = lines
            .into_iter()
            .filter(|l| l.installment.derived_status(today) == InstallmentStatus::Overdue)
            .map(|line| {
                let days = days_overdue(line.installment.due_date(), today);
                OverdueItem {
                    days_overdue: days,
                    severity: severity(days),
                    remaining_amount: line.installment.remaining_amount(),
                    line,
                }
            })
            .collect();
        items.sort_by(|a, b| {
            b.days_overdue
                .cmp(&a.days_overdue)
                .then_with(|| a.line.student_name.cmp(&b.line.student_name))
        });

        let total_count = items.len();
        let total_remaining = items.iter().map(|i| i.remaining_amount).sum();
        let critical_count = items.iter().filter(|i| i.severity == Severity::Critical).count();
        let total_days: i64 = items.iter().map(|i| i.days_overdue).sum();
        let average_days_overdue = if total_count == 0 {
            0
        } else {
            (Decimal::from(total_days) / Decimal::from(total_count))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap_or(0)
        };

        let mut grouped: HashMap<StudentId, StudentOverdue> = HashMap::new();
        for item in &items {
            let entry = grouped
                .entry(item.line.student_id)
                .or_insert_with(|| StudentOverdue {
                    student_id: item.line.student_id,
                    student_name: item.line.student_name.clone(),
                    overdue_count: 0,
                    total_remaining: Decimal::ZERO,
                    max_days_overdue: 0,
                });
            entry.overdue_count += 1;
            entry.total_remaining += item.remaining_amount;
            entry.max_days_overdue = entry.max_days_overdue.max(item.days_overdue);
        }
        let mut by_student: Vec<StudentOverdue> = grouped.into_values().collect();
        by_student.sort_by(|a, b| {
            b.total_remaining
                .cmp(&a.total_remaining)
                .then_with(|| a.student_name.cmp(&b.student_name))
        });

        Self {
            items,
            total_count,
            total_remaining,
            critical_count,
            average_days_overdue,
            by_student,
        }
    }
}
