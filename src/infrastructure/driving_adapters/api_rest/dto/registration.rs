//! Registration DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::enrollment::EnrollmentResponseDto;
use super::student::StudentResponseDto;
use super::validation::validate_phone;
use crate::application::use_cases::registrations::{NewRegistration, ValidatedRegistration};
use crate::domain::models::ids::{CourseId, SessionId};
use crate::domain::models::registration::{Registration, RegistrationStatus, UpdateRegistrationData};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationDto {
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    pub course_id: Uuid,
    pub session_id: Option<Uuid>,
    pub notes: Option<String>,

    /// Defaults to the course's registration fee
    pub registration_fee: Option<Decimal>,
}

impl From<CreateRegistrationDto> for NewRegistration {
    fn from(dto: CreateRegistrationDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            course_id: CourseId::from_uuid(dto.course_id),
            session_id: dto.session_id.map(SessionId::from_uuid),
            notes: dto.notes,
            registration_fee: dto.registration_fee,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationDto {
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    pub course_id: Option<Uuid>,
    pub session_id: Option<Uuid>,
    pub notes: Option<String>,
    pub registration_fee: Option<Decimal>,
}

impl From<UpdateRegistrationDto> for UpdateRegistrationData {
    fn from(dto: UpdateRegistrationDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            course_id: dto.course_id.map(CourseId::from_uuid),
            session_id: dto.session_id.map(SessionId::from_uuid),
            notes: dto.notes,
            registration_fee: dto.registration_fee,
        }
    }
}

/// Body of `POST /registrations/{id}/validate`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRegistrationDto {
    /// Generates a schedule for the new enrollment when given
    pub payment_plan_id: Option<Uuid>,
}

/// Body of `POST /registrations/{id}/reject`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RejectRegistrationDto {
    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

/// Query parameters for listing registrations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationListQuery {
    /// Status code or French label
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponseDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course_id: Uuid,
    pub session_id: Option<Uuid>,
    pub status: RegistrationStatus,
    pub status_label: &'static str,
    pub notes: Option<String>,
    pub registration_fee: Decimal,
    pub registration_fee_paid: bool,
    pub registration_fee_paid_at: Option<DateTime<Utc>>,
    pub student_id: Option<Uuid>,
    pub validated_at: Option<DateTime<Utc>>,
    pub validated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationResponseDto {
    fn from(registration: Registration) -> Self {
        Self {
            id: *registration.id().as_uuid(),
            first_name: registration.first_name().to_string(),
            last_name: registration.last_name().to_string(),
            email: registration.email().map(ToString::to_string),
            phone: registration.phone().map(ToString::to_string),
            course_id: *registration.course_id().as_uuid(),
            session_id: registration.session_id().map(|id| *id.as_uuid()),
            status: registration.status(),
            status_label: registration.status().label(),
            notes: registration.notes().map(ToString::to_string),
            registration_fee: registration.registration_fee(),
            registration_fee_paid: registration.registration_fee_paid(),
            registration_fee_paid_at: registration.registration_fee_paid_at(),
            student_id: registration.student_id().map(|id| *id.as_uuid()),
            validated_at: registration.validated_at(),
            validated_by: registration.validated_by().map(|id| *id.as_uuid()),
            created_at: registration.created_at(),
            updated_at: registration.updated_at(),
        }
    }
}

/// Outcome of validating a registration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRegistrationResponseDto {
    pub registration: RegistrationResponseDto,
    pub student: StudentResponseDto,
    pub enrollment: EnrollmentResponseDto,
    pub installments_count: usize,
}

impl From<ValidatedRegistration> for ValidatedRegistrationResponseDto {
    fn from(outcome: ValidatedRegistration) -> Self {
        Self {
            registration: outcome.registration.into(),
            student: outcome.student.into(),
            enrollment: outcome.enrollment.into(),
            installments_count: outcome.installments_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registration_maps_ids() {
        let course_id = Uuid::new_v4();
        let dto: CreateRegistrationDto = serde_json::from_value(serde_json::json!({
            "firstName": "Omar",
            "lastName": "Benali",
            "phone": "+212600000000",
            "courseId": course_id
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        let request = NewRegistration::from(dto);
        assert_eq!(*request.course_id.as_uuid(), course_id);
        assert!(request.session_id.is_none());
        assert!(request.registration_fee.is_none());
    }

    #[test]
    fn test_validate_body_may_be_empty() {
        let dto: ValidateRegistrationDto = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(dto.payment_plan_id.is_none());
    }
}
