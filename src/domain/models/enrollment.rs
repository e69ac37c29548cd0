//! Enrollment Domain Model

use chrono::{DateTime, NaiveDate, Utc};

use super::ids::{CourseId, EnrollmentId, PaymentPlanId, SessionId, StudentId};
use super::labels::labeled_enum;
use crate::shared::errors::DomainError;

labeled_enum!(
    /// Lifecycle of an enrollment
    EnrollmentStatus {
        Active => ("ACTIVE", "Active"),
        Completed => ("COMPLETED", "Terminée"),
        Cancelled => ("CANCELLED", "Annulée"),
    }
);

/// Data required to create a new Enrollment
#[derive(Debug, Clone)]
pub struct CreateEnrollmentData {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub session_id: Option<SessionId>,
    pub payment_plan_id: Option<PaymentPlanId>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Links a student to a course, and optionally a session and payment plan
#[derive(Debug, Clone)]
pub struct Enrollment {
    id: EnrollmentId,
    student_id: StudentId,
    course_id: CourseId,
    session_id: Option<SessionId>,
    payment_plan_id: Option<PaymentPlanId>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: EnrollmentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Enrollment {
    /// Create a new active Enrollment
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `end_date` precedes `start_date`.
    pub fn new(data: CreateEnrollmentData) -> Result<Self, DomainError> {
        if let Some(end_date) = data.end_date {
            if end_date < data.start_date {
                return Err(DomainError::Validation(
                    "end_date must not be before start_date".to_string(),
                ));
            }
        }
        let now = Utc::now();
        Ok(Self {
            id: EnrollmentId::new(),
            student_id: data.student_id,
            course_id: data.course_id,
            session_id: data.session_id,
            payment_plan_id: data.payment_plan_id,
            start_date: data.start_date,
            end_date: data.end_date,
            status: EnrollmentStatus::Active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore an Enrollment from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: EnrollmentId,
        student_id: StudentId,
        course_id: CourseId,
        session_id: Option<SessionId>,
        payment_plan_id: Option<PaymentPlanId>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        status: EnrollmentStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            student_id,
            course_id,
            session_id,
            payment_plan_id,
            start_date,
            end_date,
            status,
            created_at,
            updated_at,
        }
    }

    /// Change the enrollment status
    #[must_use]
    pub fn with_status(self, status: EnrollmentStatus) -> Self {
        Self {
            status,
            updated_at: Utc::now(),
            ..self
        }
    }

    #[must_use]
    pub fn id(&self) -> &EnrollmentId {
        &self.id
    }

    #[must_use]
    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    #[must_use]
    pub fn payment_plan_id(&self) -> Option<&PaymentPlanId> {
        self.payment_plan_id.as_ref()
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    #[must_use]
    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
