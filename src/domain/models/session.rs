//! Session Domain Model
//!
//! A dated run of a course, typically one month of classes.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::ids::{CourseId, SessionId, TrainerId};
use super::labels::labeled_enum;
use super::rules::{non_negative_amount, optional_text, required_text};
use crate::domain::finance::month_name;
use crate::shared::errors::DomainError;

labeled_enum!(
    /// Lifecycle of a session
    SessionStatus {
        Upcoming => ("UPCOMING", "À venir"),
        InProgress => ("IN_PROGRESS", "En cours"),
        Completed => ("COMPLETED", "Terminée"),
        Cancelled => ("CANCELLED", "Annulée"),
    }
);

/// Data required to create a new Session
#[derive(Debug, Clone)]
pub struct CreateSessionData {
    pub course_id: CourseId,
    pub trainer_id: Option<TrainerId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub capacity: i32,
    pub location: String,
    pub price: Option<Decimal>,
    pub notes: Option<String>,
}

/// Data for updating an existing Session
#[derive(Debug, Clone, Default)]
pub struct UpdateSessionData {
    pub trainer_id: Option<TrainerId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub price: Option<Decimal>,
    pub status: Option<SessionStatus>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

/// Session domain entity
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    course_id: CourseId,
    trainer_id: Option<TrainerId>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    year: Option<i32>,
    month: Option<u32>,
    capacity: i32,
    enrolled_count: i32,
    location: String,
    price: Option<Decimal>,
    status: SessionStatus,
    notes: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a new upcoming Session
    ///
    /// When `year`/`month` are omitted they default to the start date's.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the dates are inverted, the
    /// capacity is below one, the month is out of range or the location is blank.
    pub fn new(data: CreateSessionData) -> Result<Self, DomainError> {
        let now = Utc::now();
        let session = Self {
            id: SessionId::new(),
            course_id: data.course_id,
            trainer_id: data.trainer_id,
            start_date: data.start_date,
            end_date: data.end_date,
            year: data.year.or(Some(data.start_date.year())),
            month: data.month.or(Some(data.start_date.month())),
            capacity: data.capacity,
            enrolled_count: 0,
            location: required_text("location", data.location)?,
            price: data.price.map(|p| non_negative_amount("price", p)).transpose()?,
            status: SessionStatus::Upcoming,
            notes: optional_text(data.notes),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        session.validate()
    }

    /// Restore a Session from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: SessionId,
        course_id: CourseId,
        trainer_id: Option<TrainerId>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        year: Option<i32>,
        month: Option<u32>,
        capacity: i32,
        enrolled_count: i32,
        location: String,
        price: Option<Decimal>,
        status: SessionStatus,
        notes: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            course_id,
            trainer_id,
            start_date,
            end_date,
            year,
            month,
            capacity,
            enrolled_count,
            location,
            price,
            status,
            notes,
            is_active,
            created_at,
            updated_at,
        }
    }

    /// Apply updates, returning a new instance
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the result breaks an invariant.
    pub fn with_updates(self, data: UpdateSessionData) -> Result<Self, DomainError> {
        let location = match data.location {
            Some(v) => required_text("location", v)?,
            None => self.location,
        };
        let price = match data.price {
            Some(v) => Some(non_negative_amount("price", v)?),
            None => self.price,
        };
        Self {
            trainer_id: data.trainer_id.or(self.trainer_id),
            start_date: data.start_date.unwrap_or(self.start_date),
            end_date: data.end_date.unwrap_or(self.end_date),
            year: data.year.or(self.year),
            month: data.month.or(self.month),
            capacity: data.capacity.unwrap_or(self.capacity),
            location,
            price,
            status: data.status.unwrap_or(self.status),
            notes: optional_text(data.notes).or(self.notes),
            is_active: data.is_active.unwrap_or(self.is_active),
            updated_at: Utc::now(),
            ..self
        }
        .validate()
    }

    fn validate(self) -> Result<Self, DomainError> {
        if self.end_date < self.start_date {
            return Err(DomainError::Validation(
                "end_date must not be before start_date".to_string(),
            ));
        }
        if self.capacity < 1 {
            return Err(DomainError::Validation("capacity must be at least 1".to_string()));
        }
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(DomainError::Validation(
                    "month must be between 1 and 12".to_string(),
                ));
            }
        }
        Ok(self)
    }

    /// Display label such as "Septembre 2025"
    #[must_use]
    pub fn month_label(&self) -> Option<String> {
        match (self.month, self.year) {
            (Some(month), Some(year)) => Some(format!("{} {}", month_name(month), year)),
            _ => None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn trainer_id(&self) -> Option<&TrainerId> {
        self.trainer_id.as_ref()
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.month
    }

    #[must_use]
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    #[must_use]
    pub fn enrolled_count(&self) -> i32 {
        self.enrolled_count
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
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
