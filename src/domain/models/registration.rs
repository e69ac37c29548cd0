//! Registration Domain Model
//!
//! A registration request submitted before the person becomes a student.
//! Finance collects the registration fee, then an administrator validates
//! or rejects it. Validation is final.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::ids::{CourseId, RegistrationId, SessionId, StudentId, UserId};
use super::labels::labeled_enum;
use super::rules::{non_negative_amount, optional_text, required_text};
use crate::shared::errors::DomainError;

labeled_enum!(
    /// Lifecycle of a registration request
    RegistrationStatus {
        PendingPayment => ("PENDING_PAYMENT", "En attente de paiement"),
        Validated => ("VALIDATED", "Validée par Finance"),
        Rejected => ("REJECTED", "Refusée"),
    }
);

/// Data required to create a new Registration
#[derive(Debug, Clone)]
pub struct CreateRegistrationData {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course_id: CourseId,
    pub session_id: Option<SessionId>,
    pub notes: Option<String>,
    pub registration_fee: Decimal,
}

/// Data for updating an existing Registration
#[derive(Debug, Clone, Default)]
pub struct UpdateRegistrationData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course_id: Option<CourseId>,
    pub session_id: Option<SessionId>,
    pub notes: Option<String>,
    pub registration_fee: Option<Decimal>,
}

/// Registration domain entity
#[derive(Debug, Clone)]
pub struct Registration {
    id: RegistrationId,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    course_id: CourseId,
    session_id: Option<SessionId>,
    status: RegistrationStatus,
    notes: Option<String>,
    registration_fee: Decimal,
    registration_fee_paid: bool,
    registration_fee_paid_at: Option<DateTime<Utc>>,
    student_id: Option<StudentId>,
    validated_at: Option<DateTime<Utc>>,
    validated_by: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Registration {
    /// Create a new Registration awaiting its fee
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` on blank names or a negative fee.
    pub fn new(data: CreateRegistrationData) -> Result<Self, DomainError> {
        let now = Utc::now();
        Ok(Self {
            id: RegistrationId::new(),
            first_name: required_text("first_name", data.first_name)?,
            last_name: required_text("last_name", data.last_name)?,
            email: optional_text(data.email).map(|e| e.to_lowercase()),
            phone: optional_text(data.phone),
            course_id: data.course_id,
            session_id: data.session_id,
            status: RegistrationStatus::PendingPayment,
            notes: optional_text(data.notes),
            registration_fee: non_negative_amount("registration_fee", data.registration_fee)?,
            registration_fee_paid: false,
            registration_fee_paid_at: None,
            student_id: None,
            validated_at: None,
            validated_by: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a Registration from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RegistrationId,
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone: Option<String>,
        course_id: CourseId,
        session_id: Option<SessionId>,
        status: RegistrationStatus,
        notes: Option<String>,
        registration_fee: Decimal,
        registration_fee_paid: bool,
        registration_fee_paid_at: Option<DateTime<Utc>>,
        student_id: Option<StudentId>,
        validated_at: Option<DateTime<Utc>>,
        validated_by: Option<UserId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            phone,
            course_id,
            session_id,
            status,
            notes,
            registration_fee,
            registration_fee_paid,
            registration_fee_paid_at,
            student_id,
            validated_at,
            validated_by,
            created_at,
            updated_at,
        }
    }

    fn ensure_not_validated(&self, action: &str) -> Result<(), DomainError> {
        if self.status == RegistrationStatus::Validated {
            return Err(DomainError::InvalidState(format!(
                "a validated registration cannot be {action}"
            )));
        }
        Ok(())
    }

    /// Apply updates, returning a new instance
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` once validated, and
    /// `DomainError::Validation` when an updated field breaks an invariant.
    pub fn with_updates(self, data: UpdateRegistrationData) -> Result<Self, DomainError> {
        self.ensure_not_validated("modified")?;
        Ok(Self {
            first_name: match data.first_name {
                Some(v) => required_text("first_name", v)?,
                None => self.first_name,
            },
            last_name: match data.last_name {
                Some(v) => required_text("last_name", v)?,
                None => self.last_name,
            },
            email: optional_text(data.email).map(|e| e.to_lowercase()).or(self.email),
            phone: optional_text(data.phone).or(self.phone),
            course_id: data.course_id.unwrap_or(self.course_id),
            session_id: data.session_id.or(self.session_id),
            notes: optional_text(data.notes).or(self.notes),
            registration_fee: match data.registration_fee {
                Some(v) => non_negative_amount("registration_fee", v)?,
                None => self.registration_fee,
            },
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Check that the registration may be deleted
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` once validated.
    pub fn ensure_deletable(&self) -> Result<(), DomainError> {
        self.ensure_not_validated("deleted")
    }

    /// Record the registration fee as collected
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` when the fee is already paid or
    /// the registration was rejected.
    pub fn pay_fee(self, paid_at: DateTime<Utc>) -> Result<Self, DomainError> {
        if self.registration_fee_paid {
            return Err(DomainError::InvalidState(
                "registration fee already paid".to_string(),
            ));
        }
        if self.status == RegistrationStatus::Rejected {
            return Err(DomainError::InvalidState(
                "cannot collect the fee of a rejected registration".to_string(),
            ));
        }
        Ok(Self {
            registration_fee_paid: true,
            registration_fee_paid_at: Some(paid_at),
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Mark the registration validated and link the created student
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` unless the registration is pending.
    pub fn validate(
        self,
        student_id: StudentId,
        validated_by: Option<UserId>,
        validated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if self.status != RegistrationStatus::PendingPayment {
            return Err(DomainError::InvalidState(format!(
                "registration is {} and cannot be validated",
                self.status.label()
            )));
        }
        Ok(Self {
            status: RegistrationStatus::Validated,
            student_id: Some(student_id),
            validated_at: Some(validated_at),
            validated_by,
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Mark the registration rejected, optionally replacing its notes
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` once validated.
    pub fn reject(self, notes: Option<String>) -> Result<Self, DomainError> {
        self.ensure_not_validated("rejected")?;
        Ok(Self {
            status: RegistrationStatus::Rejected,
            notes: optional_text(notes).or(self.notes),
            updated_at: Utc::now(),
            ..self
        })
    }

    #[must_use]
    pub fn id(&self) -> &RegistrationId {
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
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
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
    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    #[must_use]
    pub fn registration_fee(&self) -> Decimal {
        self.registration_fee
    }

    #[must_use]
    pub fn registration_fee_paid(&self) -> bool {
        self.registration_fee_paid
    }

    #[must_use]
    pub fn registration_fee_paid_at(&self) -> Option<DateTime<Utc>> {
        self.registration_fee_paid_at
    }

    #[must_use]
    pub fn student_id(&self) -> Option<&StudentId> {
        self.student_id.as_ref()
    }

    #[must_use]
    pub fn validated_at(&self) -> Option<DateTime<Utc>> {
        self.validated_at
    }

    #[must_use]
    pub fn validated_by(&self) -> Option<&UserId> {
        self.validated_by.as_ref()
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
    use rust_decimal_macros::dec;

    fn pending() -> Registration {
        Registration::new(CreateRegistrationData {
            first_name: "Nadia".into(),
            last_name: "Khelifi".into(),
            email: Some("NADIA@example.com".into()),
            phone: None,
            course_id: CourseId::new(),
            session_id: None,
            notes: None,
            registration_fee: dec!(1500),
        })
        .unwrap()
    }

    #[test]
    fn test_new_registration_awaits_payment() {
        let registration = pending();
        assert_eq!(registration.status(), RegistrationStatus::PendingPayment);
        assert_eq!(registration.email(), Some("nadia@example.com"));
        assert!(!registration.registration_fee_paid());
    }

    #[test]
    fn test_pay_fee_twice_is_rejected() {
        let paid = pending().pay_fee(Utc::now()).unwrap();
        assert!(paid.registration_fee_paid());
        assert!(paid.registration_fee_paid_at().is_some());
        assert!(matches!(paid.pay_fee(Utc::now()), Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn test_validated_registration_is_frozen() {
        let student_id = StudentId::new();
        let validated = pending().validate(student_id, None, Utc::now()).unwrap();

        assert_eq!(validated.status(), RegistrationStatus::Validated);
        assert_eq!(validated.student_id(), Some(&student_id));
        assert!(validated.ensure_deletable().is_err());
        assert!(validated.clone().reject(None).is_err());
        assert!(validated
            .with_updates(UpdateRegistrationData::default())
            .is_err());
    }

    #[test]
    fn test_rejected_registration_cannot_be_validated() {
        let rejected = pending().reject(Some("Dossier incomplet".into())).unwrap();
        assert_eq!(rejected.notes(), Some("Dossier incomplet"));
        assert!(rejected.validate(StudentId::new(), None, Utc::now()).is_err());
    }
}
