//! Course DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::course::{Course, CourseType, CreateCourseData, PriceModel, UpdateCourseData};
use crate::domain::models::ids::TrainerId;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub trainer_id: Option<Uuid>,

    pub course_type: CourseType,

    /// Defaults to `GLOBAL`
    pub price_model: Option<PriceModel>,

    pub total_price: Decimal,

    pub price_per_month: Option<Decimal>,

    /// Defaults to 0
    pub registration_fee: Option<Decimal>,

    #[validate(range(min = 1, max = 120, message = "duration_months must be between 1 and 120"))]
    pub duration_months: i32,
}

impl From<CreateCourseDto> for CreateCourseData {
    fn from(dto: CreateCourseDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            trainer_id: dto.trainer_id.map(TrainerId::from_uuid),
            course_type: dto.course_type,
            price_model: dto.price_model.unwrap_or(PriceModel::Global),
            total_price: dto.total_price,
            price_per_month: dto.price_per_month,
            registration_fee: dto.registration_fee.unwrap_or(Decimal::ZERO),
            duration_months: dto.duration_months,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub trainer_id: Option<Uuid>,
    pub course_type: Option<CourseType>,
    pub price_model: Option<PriceModel>,
    pub total_price: Option<Decimal>,
    pub price_per_month: Option<Decimal>,
    pub registration_fee: Option<Decimal>,

    #[validate(range(min = 1, max = 120, message = "duration_months must be between 1 and 120"))]
    pub duration_months: Option<i32>,

    pub is_active: Option<bool>,
}

impl From<UpdateCourseDto> for UpdateCourseData {
    fn from(dto: UpdateCourseDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            trainer_id: dto.trainer_id.map(TrainerId::from_uuid),
            course_type: dto.course_type,
            price_model: dto.price_model,
            total_price: dto.total_price,
            price_per_month: dto.price_per_month,
            registration_fee: dto.registration_fee,
            duration_months: dto.duration_months,
            is_active: dto.is_active,
        }
    }
}

/// Query parameters for listing courses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    #[serde(default)]
    pub active_only: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub trainer_id: Option<Uuid>,
    pub course_type: CourseType,
    pub course_type_label: &'static str,
    pub price_model: PriceModel,
    pub total_price: Decimal,
    pub price_per_month: Option<Decimal>,
    pub registration_fee: Decimal,
    pub duration_months: i32,
    /// Amount an enrollment into this course is worth
    pub contract_value: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponseDto {
    fn from(course: Course) -> Self {
        Self {
            id: *course.id().as_uuid(),
            title: course.title().to_string(),
            description: course.description().map(ToString::to_string),
            trainer_id: course.trainer_id().map(|id| *id.as_uuid()),
            course_type: course.course_type(),
            course_type_label: course.course_type().label(),
            price_model: course.price_model(),
            total_price: course.total_price(),
            price_per_month: course.price_per_month(),
            registration_fee: course.registration_fee(),
            duration_months: course.duration_months(),
            contract_value: course.contract_value(),
            is_active: course.is_active(),
            created_at: course.created_at(),
            updated_at: course.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_course_defaults() {
        let dto: CreateCourseDto = serde_json::from_value(serde_json::json!({
            "title": "Mathématiques 3ème",
            "courseType": "TUTORING_GROUP",
            "totalPrice": "400",
            "durationMonths": 10
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        let data = CreateCourseData::from(dto);
        assert_eq!(data.price_model, PriceModel::Global);
        assert_eq!(data.registration_fee, Decimal::ZERO);
        assert_eq!(data.total_price, dec!(400));
    }

    #[test]
    fn test_duration_must_be_positive() {
        let dto: CreateCourseDto = serde_json::from_value(serde_json::json!({
            "title": "Excel",
            "courseType": "QUALIFYING",
            "totalPrice": 1200,
            "durationMonths": 0
        }))
        .unwrap();

        assert!(dto.validate().unwrap_err().field_errors().contains_key("duration_months"));
    }
}
