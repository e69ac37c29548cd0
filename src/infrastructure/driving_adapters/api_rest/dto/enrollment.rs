//! Enrollment DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::payment_schedule::InstallmentResponseDto;
use crate::application::use_cases::enrollments::{CreatedEnrollment, NewEnrollment};
use crate::domain::models::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::models::ids::{CourseId, PaymentPlanId, SessionId, StudentId};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentDto {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub session_id: Option<Uuid>,

    /// Generates the installment schedule when given
    pub payment_plan_id: Option<Uuid>,

    /// Defaults to today
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    /// Registration fee handed over with a first enrollment
    pub registration_fee: Option<Decimal>,
}

impl From<CreateEnrollmentDto> for NewEnrollment {
    fn from(dto: CreateEnrollmentDto) -> Self {
        Self {
            student_id: StudentId::from_uuid(dto.student_id),
            course_id: CourseId::from_uuid(dto.course_id),
            session_id: dto.session_id.map(SessionId::from_uuid),
            payment_plan_id: dto.payment_plan_id.map(PaymentPlanId::from_uuid),
            start_date: dto.start_date,
            end_date: dto.end_date,
            registration_fee_collected: dto.registration_fee,
        }
    }
}

/// Body of `PATCH /enrollments/{id}/status`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEnrollmentStatusDto {
    pub status: EnrollmentStatus,
}

/// Query parameters for listing enrollments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentListQuery {
    pub student_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponseDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub session_id: Option<Uuid>,
    pub payment_plan_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: EnrollmentStatus,
    pub status_label: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Enrollment> for EnrollmentResponseDto {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: *enrollment.id().as_uuid(),
            student_id: *enrollment.student_id().as_uuid(),
            course_id: *enrollment.course_id().as_uuid(),
            session_id: enrollment.session_id().map(|id| *id.as_uuid()),
            payment_plan_id: enrollment.payment_plan_id().map(|id| *id.as_uuid()),
            start_date: enrollment.start_date(),
            end_date: enrollment.end_date(),
            status: enrollment.status(),
            status_label: enrollment.status().label(),
            created_at: enrollment.created_at(),
            updated_at: enrollment.updated_at(),
        }
    }
}

/// A new enrollment with the schedule generated for it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEnrollmentResponseDto {
    #[serde(flatten)]
    pub enrollment: EnrollmentResponseDto,
    pub installments: Vec<InstallmentResponseDto>,
}

impl From<CreatedEnrollment> for CreatedEnrollmentResponseDto {
    fn from(created: CreatedEnrollment) -> Self {
        Self {
            enrollment: created.enrollment.into(),
            installments: created.schedule.into_iter().map(InstallmentResponseDto::from).collect(),
        }
    }
}
