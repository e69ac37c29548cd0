//! Trainer Domain Model

use chrono::{DateTime, Utc};

use super::ids::TrainerId;
use super::rules::{optional_text, required_text};
use crate::shared::errors::DomainError;

/// Data required to create a new Trainer
#[derive(Debug, Clone)]
pub struct CreateTrainerData {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub specialty: Option<String>,
}

/// Data for updating an existing Trainer
#[derive(Debug, Clone, Default)]
pub struct UpdateTrainerData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub specialty: Option<String>,
}

/// Trainer domain entity
#[derive(Debug, Clone)]
pub struct Trainer {
    id: TrainerId,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    email: Option<String>,
    specialty: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Trainer {
    /// Create a new Trainer
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a name is blank.
    pub fn new(data: CreateTrainerData) -> Result<Self, DomainError> {
        let now = Utc::now();
        Ok(Self {
            id: TrainerId::new(),
            first_name: required_text("first_name", data.first_name)?,
            last_name: required_text("last_name", data.last_name)?,
            phone: optional_text(data.phone),
            email: optional_text(data.email).map(|e| e.to_lowercase()),
            specialty: optional_text(data.specialty),
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a Trainer from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: TrainerId,
        first_name: String,
        last_name: String,
        phone: Option<String>,
        email: Option<String>,
        specialty: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            phone,
            email,
            specialty,
            created_at,
            updated_at,
        }
    }

    /// Apply updates, returning a new instance
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when an updated name is blank.
    pub fn with_updates(self, data: UpdateTrainerData) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: match data.first_name {
                Some(v) => required_text("first_name", v)?,
                None => self.first_name,
            },
            last_name: match data.last_name {
                Some(v) => required_text("last_name", v)?,
                None => self.last_name,
            },
            phone: optional_text(data.phone).or(self.phone),
            email: optional_text(data.email).map(|e| e.to_lowercase()).or(self.email),
            specialty: optional_text(data.specialty).or(self.specialty),
            updated_at: Utc::now(),
            ..self
        })
    }

    #[must_use]
    pub fn id(&self) -> &TrainerId {
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
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_update_keeps_unspecified_fields() {
        let trainer = Trainer::new(CreateTrainerData {
            first_name: "Karim".into(),
            last_name: "Haddad".into(),
            phone: None,
            email: None,
            specialty: Some("Mathématiques".into()),
        })
        .unwrap();

        let updated = trainer
            .with_updates(UpdateTrainerData {
                phone: Some("0770112233".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.specialty(), Some("Mathématiques"));
        assert_eq!(updated.phone(), Some("0770112233"));
    }
}
