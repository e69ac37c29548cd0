//! Student DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::payment_schedule::PaymentResponseDto;
use super::validation::validate_phone;
use crate::application::use_cases::students::StudentPayments;
use crate::domain::models::student::{CreateStudentData, Student, UpdateStudentData};

/// DTO for creating a student
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: String,

    pub birth_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    pub address: Option<String>,
}

impl From<CreateStudentDto> for CreateStudentData {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            birth_date: dto.birth_date,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
        }
    }
}

/// DTO for updating a student; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    pub birth_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    pub address: Option<String>,

    pub is_registration_fee_paid: Option<bool>,
}

impl From<UpdateStudentDto> for UpdateStudentData {
    fn from(dto: UpdateStudentDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            birth_date: dto.birth_date,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            is_registration_fee_paid: dto.is_registration_fee_paid,
        }
    }
}

/// Query parameters for listing students
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponseDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub is_registration_fee_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Student> for StudentResponseDto {
    fn from(student: Student) -> Self {
        Self {
            id: *student.id().as_uuid(),
            first_name: student.first_name().to_string(),
            last_name: student.last_name().to_string(),
            full_name: student.full_name(),
            birth_date: student.birth_date(),
            phone: student.phone().map(ToString::to_string),
            email: student.email().map(ToString::to_string),
            address: student.address().map(ToString::to_string),
            is_registration_fee_paid: student.is_registration_fee_paid(),
            created_at: student.created_at(),
            updated_at: student.updated_at(),
        }
    }
}

/// Payment history of a student
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPaymentsResponseDto {
    pub payments: Vec<PaymentResponseDto>,
    pub total_paid: Decimal,
}

impl From<StudentPayments> for StudentPaymentsResponseDto {
    fn from(history: StudentPayments) -> Self {
        Self {
            payments: history.payments.into_iter().map(PaymentResponseDto::from).collect(),
            total_paid: history.total_paid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_student_rejects_bad_contact_details() {
        let dto: CreateStudentDto = serde_json::from_value(serde_json::json!({
            "firstName": "Yasmine",
            "lastName": "Alaoui",
            "phone": "not a phone",
            "email": "yasmine@"
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_create_student_minimal_body() {
        let dto: CreateStudentDto = serde_json::from_value(serde_json::json!({
            "firstName": "Yasmine",
            "lastName": "Alaoui",
            "birthDate": "2010-04-12"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        let data = CreateStudentData::from(dto);
        assert_eq!(data.birth_date, NaiveDate::from_ymd_opt(2010, 4, 12));
        assert!(data.phone.is_none());
    }
}
