//! Payment Schedule DTOs
//!
//! Installments, the payments recorded against them and the schedule
//! reports built from both.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::use_cases::payment_schedules::{EnrollmentPayment, EnrollmentSchedule, PaymentInput};
use crate::domain::finance::{
    DueItem, OverdueItem, OverdueReport, ScheduleLine, ScheduleSummary, Severity, StudentOverdue,
};
use crate::domain::models::installment::{Installment, InstallmentStatus, UpdateInstallmentData};
use crate::domain::models::payment::{Payment, PaymentMethod};

/// Body of the two payment endpoints
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,

    /// Defaults to today
    pub payment_date: Option<NaiveDate>,

    #[validate(length(max = 100, message = "reference must be at most 100 characters"))]
    pub reference: Option<String>,

    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

impl From<PaymentDto> for PaymentInput {
    fn from(dto: PaymentDto) -> Self {
        Self {
            amount: dto.amount,
            payment_method: dto.payment_method,
            payment_date: dto.payment_date,
            reference: dto.reference,
            notes: dto.notes,
        }
    }
}

/// Body of `PUT /payment-schedules/{id}`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstallmentDto {
    pub amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,

    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,

    #[serde(default)]
    pub cancel: bool,
}

impl From<UpdateInstallmentDto> for UpdateInstallmentData {
    fn from(dto: UpdateInstallmentDto) -> Self {
        Self {
            amount: dto.amount,
            due_date: dto.due_date,
            notes: dto.notes,
            cancel: dto.cancel,
        }
    }
}

/// Query parameters for listing installments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleListQuery {
    /// Status code or French label, matched against today's status
    pub status: Option<String>,
    pub student_id: Option<Uuid>,
    pub enrollment_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
}

/// `?days=` window for upcoming installments and alerts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DaysQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentResponseDto {
    pub id: Uuid,
    pub enrollment_id: Uuid,
    pub installment_number: i32,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
    pub paid_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
    pub status: InstallmentStatus,
    pub status_label: &'static str,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Installment> for InstallmentResponseDto {
    fn from(installment: Installment) -> Self {
        Self {
            id: *installment.id().as_uuid(),
            enrollment_id: *installment.enrollment_id().as_uuid(),
            installment_number: installment.installment_number(),
            amount: installment.amount(),
            due_date: installment.due_date(),
            paid_amount: installment.paid_amount(),
            remaining_amount: installment.remaining_amount(),
            paid_date: installment.paid_date(),
            payment_method: installment.payment_method(),
            status: installment.status(),
            status_label: installment.status().label(),
            notes: installment.notes().map(ToString::to_string),
            created_at: installment.created_at(),
            updated_at: installment.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponseDto {
    pub id: Uuid,
    pub installment_id: Option<Uuid>,
    pub enrollment_id: Uuid,
    pub student_id: Uuid,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_method_label: &'static str,
    pub payment_date: NaiveDate,
    pub reference: Option<String>,
    pub received_by: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponseDto {
    fn from(payment: Payment) -> Self {
        Self {
            id: *payment.id().as_uuid(),
            installment_id: payment.installment_id().map(|id| *id.as_uuid()),
            enrollment_id: *payment.enrollment_id().as_uuid(),
            student_id: *payment.student_id().as_uuid(),
            amount: payment.amount(),
            payment_method: payment.payment_method(),
            payment_method_label: payment.payment_method().label(),
            payment_date: payment.payment_date(),
            reference: payment.reference().map(ToString::to_string),
            received_by: payment.received_by().map(|id| *id.as_uuid()),
            notes: payment.notes().map(ToString::to_string),
            created_at: payment.created_at(),
        }
    }
}

/// An installment with its student and course
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLineResponseDto {
    #[serde(flatten)]
    pub installment: InstallmentResponseDto,
    pub student_id: Uuid,
    pub student_name: String,
    pub course_id: Uuid,
    pub course_title: String,
}

impl From<ScheduleLine> for ScheduleLineResponseDto {
    fn from(line: ScheduleLine) -> Self {
        Self {
            installment: line.installment.into(),
            student_id: *line.student_id.as_uuid(),
            student_name: line.student_name,
            course_id: *line.course_id.as_uuid(),
            course_title: line.course_title,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummaryDto {
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
    pub installments_count: usize,
    pub paid_count: usize,
    pub partial_count: usize,
    pub pending_count: usize,
    pub overdue_count: usize,
    pub cancelled_count: usize,
    /// Whole percentage of the total collected
    pub collection_rate: u32,
}

impl From<ScheduleSummary> for ScheduleSummaryDto {
    fn from(summary: ScheduleSummary) -> Self {
        Self {
            total_amount: summary.total_amount,
            paid_amount: summary.paid_amount,
            remaining_amount: summary.remaining_amount,
            installments_count: summary.installments_count,
            paid_count: summary.paid_count,
            partial_count: summary.partial_count,
            pending_count: summary.pending_count,
            overdue_count: summary.overdue_count,
            cancelled_count: summary.cancelled_count,
            collection_rate: summary.collection_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentScheduleResponseDto {
    pub enrollment_id: Uuid,
    pub installments: Vec<InstallmentResponseDto>,
    pub summary: ScheduleSummaryDto,
}

impl From<EnrollmentSchedule> for EnrollmentScheduleResponseDto {
    fn from(schedule: EnrollmentSchedule) -> Self {
        Self {
            enrollment_id: *schedule.enrollment_id.as_uuid(),
            installments: schedule.installments.into_iter().map(InstallmentResponseDto::from).collect(),
            summary: schedule.summary.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueItemDto {
    #[serde(flatten)]
    pub line: ScheduleLineResponseDto,
    pub days_overdue: i64,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub amount_due: Decimal,
}

impl From<OverdueItem> for OverdueItemDto {
    fn from(item: OverdueItem) -> Self {
        Self {
            line: item.line.into(),
            days_overdue: item.days_overdue,
            severity: item.severity,
            severity_label: item.severity.label(),
            amount_due: item.remaining_amount,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentOverdueDto {
    pub student_id: Uuid,
    pub student_name: String,
    pub overdue_count: usize,
    pub total_remaining: Decimal,
    pub max_days_overdue: i64,
}

impl From<StudentOverdue> for StudentOverdueDto {
    fn from(student: StudentOverdue) -> Self {
        Self {
            student_id: *student.student_id.as_uuid(),
            student_name: student.student_name,
            overdue_count: student.overdue_count,
            total_remaining: student.total_remaining,
            max_days_overdue: student.max_days_overdue,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueReportDto {
    pub items: Vec<OverdueItemDto>,
    pub total_count: usize,
    pub total_remaining: Decimal,
    pub critical_count: usize,
    pub average_days_overdue: i64,
    pub by_student: Vec<StudentOverdueDto>,
}

impl From<OverdueReport> for OverdueReportDto {
    fn from(report: OverdueReport) -> Self {
        Self {
            items: report.items.into_iter().map(OverdueItemDto::from).collect(),
            total_count: report.total_count,
            total_remaining: report.total_remaining,
            critical_count: report.critical_count,
            average_days_overdue: report.average_days_overdue,
            by_student: report.by_student.into_iter().map(StudentOverdueDto::from).collect(),
        }
    }
}

/// An unpaid installment falling due soon, or already late
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueItemDto {
    #[serde(flatten)]
    pub line: ScheduleLineResponseDto,
    /// Negative once past due
    pub days_remaining: i64,
    pub amount_due: Decimal,
    pub severity: Option<Severity>,
}

impl From<DueItem> for DueItemDto {
    fn from(item: DueItem) -> Self {
        Self {
            line: item.line.into(),
            days_remaining: item.days_remaining,
            amount_due: item.remaining_amount,
            severity: item.severity,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPaymentResponseDto {
    pub payments: Vec<PaymentResponseDto>,
    pub installments: Vec<InstallmentResponseDto>,
    pub total_applied: Decimal,
    /// Amount left over once every installment is paid; not recorded
    pub remaining_credit: Decimal,
}

impl From<EnrollmentPayment> for EnrollmentPaymentResponseDto {
    fn from(outcome: EnrollmentPayment) -> Self {
        Self {
            payments: outcome.payments.into_iter().map(PaymentResponseDto::from).collect(),
            installments: outcome.installments.into_iter().map(InstallmentResponseDto::from).collect(),
            total_applied: outcome.total_applied,
            remaining_credit: outcome.remaining_credit,
        }
    }
}

/// Row count returned by bulk operations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedRowsDto {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::finance::ScheduledInstallment;
    use crate::domain::models::ids::EnrollmentId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_body() {
        let dto: PaymentDto = serde_json::from_value(serde_json::json!({
            "amount": "1500.50",
            "paymentMethod": "BANK_TRANSFER",
            "reference": "VIR-2025-001"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        let input = PaymentInput::from(dto);
        assert_eq!(input.amount, dec!(1500.50));
        assert_eq!(input.payment_method, PaymentMethod::BankTransfer);
        assert!(input.payment_date.is_none());
    }

    #[test]
    fn test_cancel_defaults_to_false() {
        let dto: UpdateInstallmentDto =
            serde_json::from_value(serde_json::json!({ "dueDate": "2025-11-05" })).unwrap();
        assert!(!UpdateInstallmentData::from(dto).cancel);
    }

    #[test]
    fn test_installment_response_exposes_remaining_amount() {
        let installment = Installment::new(
            EnrollmentId::new(),
            ScheduledInstallment {
                number: 1,
                amount: dec!(900),
                due_date: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
                notes: None,
            },
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        )
        .unwrap();

        let json = serde_json::to_value(InstallmentResponseDto::from(installment)).unwrap();
        let remaining: Decimal = json["remainingAmount"].as_str().unwrap().parse().unwrap();
        assert_eq!(remaining, dec!(900));
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["installmentNumber"], 1);
    }
}
