//! Payment Domain Model
//!
//! An immutable record of money received against an enrollment.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::ids::{EnrollmentId, InstallmentId, PaymentId, StudentId, UserId};
use super::labels::labeled_enum;
use super::rules::{optional_text, positive_amount};
use crate::shared::errors::DomainError;

labeled_enum!(
    /// How money was received
    PaymentMethod {
        Cash => ("CASH", "Espèces"),
        Check => ("CHECK", "Chèque"),
        BankTransfer => ("BANK_TRANSFER", "Virement bancaire"),
        Card => ("CARD", "Carte bancaire"),
        Online => ("ONLINE", "Paiement en ligne"),
    }
);

/// Data required to record a Payment
#[derive(Debug, Clone)]
pub struct CreatePaymentData {
    pub installment_id: Option<InstallmentId>,
    pub enrollment_id: EnrollmentId,
    pub student_id: StudentId,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_date: NaiveDate,
    pub reference: Option<String>,
    pub received_by: Option<UserId>,
    pub notes: Option<String>,
}

/// Payment domain entity
#[derive(Debug, Clone)]
pub struct Payment {
    id: PaymentId,
    installment_id: Option<InstallmentId>,
    enrollment_id: EnrollmentId,
    student_id: StudentId,
    amount: Decimal,
    payment_method: PaymentMethod,
    payment_date: NaiveDate,
    reference: Option<String>,
    received_by: Option<UserId>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl Payment {
    /// Record a new Payment
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the amount is not positive.
    pub fn new(data: CreatePaymentData) -> Result<Self, DomainError> {
        Ok(Self {
            id: PaymentId::new(),
            installment_id: data.installment_id,
            enrollment_id: data.enrollment_id,
            student_id: data.student_id,
            amount: positive_amount("amount", data.amount)?,
            payment_method: data.payment_method,
            payment_date: data.payment_date,
            reference: optional_text(data.reference),
            received_by: data.received_by,
            notes: optional_text(data.notes),
            created_at: Utc::now(),
        })
    }

    /// Restore a Payment from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: PaymentId,
        installment_id: Option<InstallmentId>,
        enrollment_id: EnrollmentId,
        student_id: StudentId,
        amount: Decimal,
        payment_method: PaymentMethod,
        payment_date: NaiveDate,
        reference: Option<String>,
        received_by: Option<UserId>,
        notes: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            installment_id,
            enrollment_id,
            student_id,
            amount,
            payment_method,
            payment_date,
            reference,
            received_by,
            notes,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &PaymentId {
        &self.id
    }

    #[must_use]
    pub fn installment_id(&self) -> Option<&InstallmentId> {
        self.installment_id.as_ref()
    }

    #[must_use]
    pub fn enrollment_id(&self) -> &EnrollmentId {
        &self.enrollment_id
    }

    #[must_use]
    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    #[must_use]
    pub fn payment_date(&self) -> NaiveDate {
        self.payment_date
    }

    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    #[must_use]
    pub fn received_by(&self) -> Option<&UserId> {
        self.received_by.as_ref()
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
