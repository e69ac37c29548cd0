//! Finance and Dashboard DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payment_schedule::ScheduleSummaryDto;
use super::transaction::LedgerSummaryDto;
use crate::application::use_cases::dashboard::DashboardStats;
use crate::domain::finance::{FinanceStats, MonthEntry, MonthStatus, MonthlyTracking, StudentTracking};

/// Query parameters of the monthly tracking report
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthlyTrackingQuery {
    pub year: Option<i32>,
    pub course_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntryDto {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub expected: Decimal,
    pub paid: Decimal,
    pub remaining: Decimal,
    pub status: MonthStatus,
}

impl From<MonthEntry> for MonthEntryDto {
    fn from(entry: MonthEntry) -> Self {
        Self {
            year: entry.year,
            month: entry.month,
            label: entry.label,
            expected: entry.expected,
            paid: entry.paid,
            remaining: entry.remaining,
            status: entry.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentTrackingDto {
    pub student_id: Uuid,
    pub student_name: String,
    pub months: Vec<MonthEntryDto>,
    pub total_expected: Decimal,
    pub total_paid: Decimal,
    pub total_remaining: Decimal,
}

impl From<StudentTracking> for StudentTrackingDto {
    fn from(student: StudentTracking) -> Self {
        Self {
            student_id: *student.student_id.as_uuid(),
            student_name: student.student_name,
            months: student.months.into_iter().map(MonthEntryDto::from).collect(),
            total_expected: student.total_expected,
            total_paid: student.total_paid,
            total_remaining: student.total_remaining,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrackingDto {
    pub students: Vec<StudentTrackingDto>,
    pub total_expected: Decimal,
    pub total_paid: Decimal,
    pub total_remaining: Decimal,
    pub collection_rate: u32,
}

impl From<MonthlyTracking> for MonthlyTrackingDto {
    fn from(tracking: MonthlyTracking) -> Self {
        Self {
            students: tracking.students.into_iter().map(StudentTrackingDto::from).collect(),
            total_expected: tracking.total_expected,
            total_paid: tracking.total_paid,
            total_remaining: tracking.total_remaining,
            collection_rate: tracking.collection_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceStatsDto {
    pub schedule: ScheduleSummaryDto,
    pub ledger: LedgerSummaryDto,
    pub overdue_amount: Decimal,
    pub overdue_count: usize,
    pub critical_count: usize,
}

impl From<FinanceStats> for FinanceStatsDto {
    fn from(stats: FinanceStats) -> Self {
        Self {
            schedule: stats.schedule.into(),
            ledger: stats.ledger.into(),
            overdue_amount: stats.overdue_amount,
            overdue_count: stats.overdue_count,
            critical_count: stats.critical_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_students: i64,
    pub active_courses: i64,
    pub active_enrollments: i64,
    pub pending_registrations: i64,
    pub upcoming_sessions: i64,
    pub total_revenue: Decimal,
    pub total_expected: Decimal,
    pub collection_rate: u32,
    pub overdue_count: usize,
    pub overdue_amount: Decimal,
}

impl From<DashboardStats> for DashboardStatsDto {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_students: stats.total_students,
            active_courses: stats.active_courses,
            active_enrollments: stats.active_enrollments,
            pending_registrations: stats.pending_registrations,
            upcoming_sessions: stats.upcoming_sessions,
            total_revenue: stats.total_revenue,
            total_expected: stats.total_expected,
            collection_rate: stats.collection_rate,
            overdue_count: stats.overdue_count,
            overdue_amount: stats.overdue_amount,
        }
    }
}
