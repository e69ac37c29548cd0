//! Installment Domain Model
//!
//! One scheduled payment of an enrollment. The stored status is always
//! what [`derive_status`] returns for the current amounts and date, except
//! that cancellation is sticky.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::ids::{EnrollmentId, InstallmentId};
use super::labels::labeled_enum;
use super::payment::PaymentMethod;
use super::rules::{optional_text, positive_amount};
use crate::domain::finance::{derive_status, ScheduledInstallment};
use crate::shared::errors::DomainError;

labeled_enum!(
    /// Payment state of an installment
    InstallmentStatus {
        Pending => ("PENDING", "En attente"),
        Partial => ("PARTIAL", "Paiement partiel"),
        Paid => ("PAID", "Payé"),
        Overdue => ("OVERDUE", "En retard"),
        Cancelled => ("CANCELLED", "Annulé"),
    }
);

/// Data for editing an installment by hand
#[derive(Debug, Clone, Default)]
pub struct UpdateInstallmentData {
    pub amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub cancel: bool,
}

/// Installment domain entity
#[derive(Debug, Clone)]
pub struct Installment {
    id: InstallmentId,
    enrollment_id: EnrollmentId,
    installment_number: i32,
    amount: Decimal,
    due_date: NaiveDate,
    paid_amount: Decimal,
    paid_date: Option<NaiveDate>,
    payment_method: Option<PaymentMethod>,
    status: InstallmentStatus,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Installment {
    /// Materialize a generated schedule line for an enrollment
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the amount is not positive.
    pub fn new(
        enrollment_id: EnrollmentId,
        scheduled: ScheduledInstallment,
        today: NaiveDate,
    ) -> Result<Self, DomainError> {
        let amount = positive_amount("amount", scheduled.amount)?;
        let now = Utc::now();
        Ok(Self {
            id: InstallmentId::new(),
            enrollment_id,
            installment_number: scheduled.number,
            amount,
            due_date: scheduled.due_date,
            paid_amount: Decimal::ZERO,
            paid_date: None,
            payment_method: None,
            status: derive_status(amount, Decimal::ZERO, scheduled.due_date, false, today),
            notes: optional_text(scheduled.notes),
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore an Installment from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: InstallmentId,
        enrollment_id: EnrollmentId,
        installment_number: i32,
        amount: Decimal,
        due_date: NaiveDate,
        paid_amount: Decimal,
        paid_date: Option<NaiveDate>,
        payment_method: Option<PaymentMethod>,
        status: InstallmentStatus,
        notes: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            enrollment_id,
            installment_number,
            amount,
            due_date,
            paid_amount,
            paid_date,
            payment_method,
            status,
            notes,
            created_at,
            updated_at,
        }
    }

    /// Amount still owed on this installment
    #[must_use]
    pub fn remaining_amount(&self) -> Decimal {
        (self.amount - self.paid_amount).max(Decimal::ZERO)
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == InstallmentStatus::Cancelled
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.paid_amount >= self.amount
    }

    /// Whether a payment can still be applied
    #[must_use]
    pub fn accepts_payment(&self) -> bool {
        !self.is_cancelled() && !self.is_settled()
    }

    /// Status this installment should have on `today`
    #[must_use]
    pub fn derived_status(&self, today: NaiveDate) -> InstallmentStatus {
        derive_status(
            self.amount,
            self.paid_amount,
            self.due_date,
            self.is_cancelled(),
            today,
        )
    }

    /// Record a payment against this installment
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` when the installment is cancelled
    /// or already paid, `DomainError::Validation` for a non-positive amount
    /// and `DomainError::PaymentExceedsRemaining` when overpaying.
    pub fn apply_payment(
        self,
        amount: Decimal,
        method: PaymentMethod,
        payment_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, DomainError> {
        if self.is_cancelled() {
            return Err(DomainError::InvalidState(
                "cannot pay a cancelled installment".to_string(),
            ));
        }
        if self.is_settled() {
            return Err(DomainError::InvalidState(
                "installment is already fully paid".to_string(),
            ));
        }
        let amount = positive_amount("amount", amount)?;
        let remaining = self.remaining_amount();
        if amount > remaining {
            return Err(DomainError::PaymentExceedsRemaining {
                attempted: amount,
                remaining,
            });
        }

        let paid_amount = self.paid_amount + amount;
        let paid_date = if paid_amount >= self.amount {
            Some(payment_date)
        } else {
            self.paid_date
        };
        Ok(Self {
            paid_amount,
            paid_date,
            payment_method: Some(method),
            status: derive_status(self.amount, paid_amount, self.due_date, false, today),
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Re-derive the stored status for `today`
    #[must_use]
    pub fn refresh_status(self, today: NaiveDate) -> Self {
        let status = self.derived_status(today);
        if status == self.status {
            return self;
        }
        Self {
            status,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Apply a manual edit
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the new amount is not positive
    /// or falls below what was already paid.
    pub fn with_updates(self, data: UpdateInstallmentData, today: NaiveDate) -> Result<Self, DomainError> {
        let amount = match data.amount {
            Some(v) => positive_amount("amount", v)?,
            None => self.amount,
        };
        if amount < self.paid_amount {
            return Err(DomainError::Validation(format!(
                "amount: cannot be lower than the {} already paid",
                self.paid_amount
            )));
        }
        let cancelled = data.cancel || self.is_cancelled();
        let due_date = data.due_date.unwrap_or(self.due_date);
        Ok(Self {
            amount,
            due_date,
            status: derive_status(amount, self.paid_amount, due_date, cancelled, today),
            notes: optional_text(data.notes).or(self.notes),
            updated_at: Utc::now(),
            ..self
        })
    }

    #[must_use]
    pub fn id(&self) -> &InstallmentId {
        &self.id
    }

    #[must_use]
    pub fn enrollment_id(&self) -> &EnrollmentId {
        &self.enrollment_id
    }

    #[must_use]
    pub fn installment_number(&self) -> i32 {
        self.installment_number
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    #[must_use]
    pub fn paid_amount(&self) -> Decimal {
        self.paid_amount
    }

    #[must_use]
    pub fn paid_date(&self) -> Option<NaiveDate> {
        self.paid_date
    }

    #[must_use]
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    #[must_use]
    pub fn status(&self) -> InstallmentStatus {
        self.status
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
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

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn installment(amount: Decimal, due: NaiveDate, today: NaiveDate) -> Installment {
        Installment::new(
            EnrollmentId::new(),
            ScheduledInstallment {
                number: 1,
                amount,
                due_date: due,
                notes: Some("Paiement 1/2".into()),
            },
            today,
        )
        .unwrap()
    }

    #[test]
    fn test_partial_then_full_payment() {
        let today = date(2025, 10, 1);
        let item = installment(dec!(3000), date(2025, 10, 5), today);
        assert_eq!(item.status(), InstallmentStatus::Pending);

        let item = item
            .apply_payment(dec!(1000), PaymentMethod::Cash, today, today)
            .unwrap();
        assert_eq!(item.status(), InstallmentStatus::Partial);
        assert_eq!(item.remaining_amount(), dec!(2000));
        assert_eq!(item.paid_date(), None);

        let item = item
            .apply_payment(dec!(2000), PaymentMethod::Check, today, today)
            .unwrap();
        assert_eq!(item.status(), InstallmentStatus::Paid);
        assert_eq!(item.paid_date(), Some(today));
        assert_eq!(item.payment_method(), Some(PaymentMethod::Check));
    }

    #[test]
    fn test_overpayment_is_rejected() {
        let today = date(2025, 10, 1);
        let item = installment(dec!(3000), date(2025, 10, 5), today);
        let err = item
            .apply_payment(dec!(3000.01), PaymentMethod::Cash, today, today)
            .unwrap_err();
        assert!(matches!(err, DomainError::PaymentExceedsRemaining { .. }));
    }

    #[test]
    fn test_paid_installment_rejects_payment() {
        let today = date(2025, 10, 1);
        let item = installment(dec!(100), date(2025, 10, 5), today)
            .apply_payment(dec!(100), PaymentMethod::Cash, today, today)
            .unwrap();
        let err = item
            .apply_payment(dec!(1), PaymentMethod::Cash, today, today)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn test_cancelled_installment_rejects_payment_and_stays_cancelled() {
        let today = date(2025, 10, 1);
        let item = installment(dec!(100), date(2025, 9, 5), today)
            .with_updates(
                UpdateInstallmentData {
                    cancel: true,
                    ..Default::default()
                },
                today,
            )
            .unwrap();
        assert_eq!(item.status(), InstallmentStatus::Cancelled);
        assert_eq!(item.clone().refresh_status(date(2026, 1, 1)).status(), InstallmentStatus::Cancelled);
        assert!(item
            .apply_payment(dec!(10), PaymentMethod::Cash, today, today)
            .is_err());
    }

    #[test]
    fn test_refresh_status_marks_overdue() {
        let item = installment(dec!(100), date(2025, 10, 5), date(2025, 10, 1));
        let refreshed = item.refresh_status(date(2025, 10, 6));
        assert_eq!(refreshed.status(), InstallmentStatus::Overdue);
    }

    #[test]
    fn test_amount_cannot_drop_below_paid() {
        let today = date(2025, 10, 1);
        let item = installment(dec!(100), date(2025, 10, 5), today)
            .apply_payment(dec!(60), PaymentMethod::Cash, today, today)
            .unwrap();
        let result = item.with_updates(
            UpdateInstallmentData {
                amount: Some(dec!(50)),
                ..Default::default()
            },
            today,
        );
        assert!(result.is_err());
    }
}
