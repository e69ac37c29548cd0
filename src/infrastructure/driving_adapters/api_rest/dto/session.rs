//! Session DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::ids::{CourseId, TrainerId};
use crate::domain::models::session::{CreateSessionData, Session, SessionStatus, UpdateSessionData};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionDto {
    pub course_id: Uuid,
    pub trainer_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Defaults to the start date's year
    pub year: Option<i32>,

    /// Defaults to the start date's month
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: Option<u32>,

    #[validate(range(min = 1, message = "capacity must be at least 1"))]
    pub capacity: i32,

    #[validate(length(min = 1, max = 200, message = "location must be between 1 and 200 characters"))]
    pub location: String,

    /// Overrides the course price for this session
    pub price: Option<Decimal>,

    pub notes: Option<String>,
}

impl From<CreateSessionDto> for CreateSessionData {
    fn from(dto: CreateSessionDto) -> Self {
        Self {
            course_id: CourseId::from_uuid(dto.course_id),
            trainer_id: dto.trainer_id.map(TrainerId::from_uuid),
            start_date: dto.start_date,
            end_date: dto.end_date,
            year: dto.year,
            month: dto.month,
            capacity: dto.capacity,
            location: dto.location,
            price: dto.price,
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionDto {
    pub trainer_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub year: Option<i32>,

    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: Option<u32>,

    #[validate(range(min = 1, message = "capacity must be at least 1"))]
    pub capacity: Option<i32>,

    #[validate(length(min = 1, max = 200, message = "location must be between 1 and 200 characters"))]
    pub location: Option<String>,

    pub price: Option<Decimal>,
    pub status: Option<SessionStatus>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateSessionDto> for UpdateSessionData {
    fn from(dto: UpdateSessionDto) -> Self {
        Self {
            trainer_id: dto.trainer_id.map(TrainerId::from_uuid),
            start_date: dto.start_date,
            end_date: dto.end_date,
            year: dto.year,
            month: dto.month,
            capacity: dto.capacity,
            location: dto.location,
            price: dto.price,
            status: dto.status,
            notes: dto.notes,
            is_active: dto.is_active,
        }
    }
}

/// Query parameters for listing sessions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionListQuery {
    pub course_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponseDto {
    pub id: Uuid,
    pub course_id: Uuid,
    pub trainer_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub month_label: Option<String>,
    pub capacity: i32,
    pub enrolled_count: i32,
    pub available_seats: i32,
    pub location: String,
    pub price: Option<Decimal>,
    pub status: SessionStatus,
    pub status_label: &'static str,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Session> for SessionResponseDto {
    fn from(session: Session) -> Self {
        Self {
            id: *session.id().as_uuid(),
            course_id: *session.course_id().as_uuid(),
            trainer_id: session.trainer_id().map(|id| *id.as_uuid()),
            start_date: session.start_date(),
            end_date: session.end_date(),
            year: session.year(),
            month: session.month(),
            month_label: session.month_label(),
            capacity: session.capacity(),
            enrolled_count: session.enrolled_count(),
            available_seats: (session.capacity() - session.enrolled_count()).max(0),
            location: session.location().to_string(),
            price: session.price(),
            status: session.status(),
            status_label: session.status().label(),
            notes: session.notes().map(ToString::to_string),
            is_active: session.is_active(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_out_of_range() {
        let dto: CreateSessionDto = serde_json::from_value(serde_json::json!({
            "courseId": Uuid::new_v4(),
            "startDate": "2025-09-01",
            "endDate": "2025-09-30",
            "month": 13,
            "capacity": 12,
            "location": "Salle A"
        }))
        .unwrap();

        assert!(dto.validate().unwrap_err().field_errors().contains_key("month"));
    }
}
