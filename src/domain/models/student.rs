//! Student Domain Model
//!
//! A learner known to the school. Students are created directly by staff or
//! when a registration is validated.

use chrono::{DateTime, NaiveDate, Utc};

use super::ids::StudentId;
use super::rules::{optional_text, required_text};
use crate::shared::errors::DomainError;

/// Data required to create a new Student
#[derive(Debug, Clone)]
pub struct CreateStudentData {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Data for updating an existing Student (all fields optional)
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub is_registration_fee_paid: Option<bool>,
}

/// Student domain entity
#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    birth_date: Option<NaiveDate>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    is_registration_fee_paid: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Student {
    /// Create a new Student from creation data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a name is blank.
    pub fn new(data: CreateStudentData) -> Result<Self, DomainError> {
        let now = Utc::now();
        Ok(Self {
            id: StudentId::new(),
            first_name: required_text("first_name", data.first_name)?,
            last_name: required_text("last_name", data.last_name)?,
            birth_date: data.birth_date,
            phone: optional_text(data.phone),
            email: optional_text(data.email).map(|e| e.to_lowercase()),
            address: optional_text(data.address),
            is_registration_fee_paid: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a Student from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: StudentId,
        first_name: String,
        last_name: String,
        birth_date: Option<NaiveDate>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        is_registration_fee_paid: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            birth_date,
            phone,
            email,
            address,
            is_registration_fee_paid,
            created_at,
            updated_at,
        }
    }

    /// Apply updates to the student, returning a new instance
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when an updated name is blank.
    pub fn with_updates(self, data: UpdateStudentData) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: match data.first_name {
                Some(v) => required_text("first_name", v)?,
                None => self.first_name,
            },
            last_name: match data.last_name {
                Some(v) => required_text("last_name", v)?,
                None => self.last_name,
            },
            birth_date: data.birth_date.or(self.birth_date),
            phone: optional_text(data.phone).or(self.phone),
            email: optional_text(data.email).map(|e| e.to_lowercase()).or(self.email),
            address: optional_text(data.address).or(self.address),
            is_registration_fee_paid: data.is_registration_fee_paid.unwrap_or(self.is_registration_fee_paid),
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Mark the one-time registration fee as settled
    #[must_use]
    pub fn mark_registration_fee_paid(self) -> Self {
        Self {
            is_registration_fee_paid: true,
            updated_at: Utc::now(),
            ..self
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &StudentId {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    #[must_use]
    pub fn is_registration_fee_paid(&self) -> bool {
        self.is_registration_fee_paid
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
