//! Ledger Transaction Domain Model
//!
//! Every income and expense of the school. Payments and registration fees
//! write income entries automatically; expenses are entered by hand.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::ids::{PaymentId, StudentId, TransactionId, UserId};
use super::labels::labeled_enum;
use super::rules::{optional_text, positive_amount};
use crate::shared::errors::DomainError;

labeled_enum!(
    /// Direction of a ledger entry
    TransactionType {
        Income => ("INCOME", "Recette"),
        Expense => ("EXPENSE", "Dépense"),
    }
);

labeled_enum!(
    /// Origin of a ledger entry
    TransactionSource {
        PaymentInstallment => ("PAYMENT_INSTALLMENT", "Paiement d'échéance"),
        RegistrationFee => ("REGISTRATION_FEE", "Frais d'inscription"),
        ManualExpense => ("MANUAL_EXPENSE", "Dépense manuelle"),
        OtherIncome => ("OTHER_INCOME", "Autre recette"),
    }
);

impl TransactionSource {
    /// Direction implied by the source
    #[must_use]
    pub fn transaction_type(self) -> TransactionType {
        match self {
            Self::ManualExpense => TransactionType::Expense,
            Self::PaymentInstallment | Self::RegistrationFee | Self::OtherIncome => TransactionType::Income,
        }
    }
}

/// Data required to create a ledger Transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionData {
    pub transaction_type: TransactionType,
    pub source: TransactionSource,
    pub amount: Decimal,
    pub description: Option<String>,
    pub motif: Option<String>,
    pub transaction_date: NaiveDate,
    pub student_id: Option<StudentId>,
    pub payment_id: Option<PaymentId>,
    pub created_by: Option<UserId>,
}

/// Transaction domain entity
#[derive(Debug, Clone)]
pub struct Transaction {
    id: TransactionId,
    transaction_type: TransactionType,
    source: TransactionSource,
    amount: Decimal,
    description: Option<String>,
    motif: Option<String>,
    transaction_date: NaiveDate,
    student_id: Option<StudentId>,
    payment_id: Option<PaymentId>,
    created_by: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new ledger entry
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the amount is not positive or
    /// the source contradicts the type.
    pub fn new(data: CreateTransactionData) -> Result<Self, DomainError> {
        if data.source.transaction_type() != data.transaction_type {
            return Err(DomainError::Validation(format!(
                "source: {} cannot be recorded as {}",
                data.source, data.transaction_type
            )));
        }
        let now = Utc::now();
        Ok(Self {
            id: TransactionId::new(),
            transaction_type: data.transaction_type,
            source: data.source,
            amount: positive_amount("amount", data.amount)?,
            description: optional_text(data.description),
            motif: optional_text(data.motif),
            transaction_date: data.transaction_date,
            student_id: data.student_id,
            payment_id: data.payment_id,
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Income entry for money received on an installment
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the amount is not positive.
    pub fn installment_income(
        amount: Decimal,
        description: String,
        transaction_date: NaiveDate,
        student_id: StudentId,
        payment_id: PaymentId,
        created_by: Option<UserId>,
    ) -> Result<Self, DomainError> {
        Self::new(CreateTransactionData {
            transaction_type: TransactionType::Income,
            source: TransactionSource::PaymentInstallment,
            amount,
            description: Some(description),
            motif: None,
            transaction_date,
            student_id: Some(student_id),
            payment_id: Some(payment_id),
            created_by,
        })
    }

    /// Income entry for a collected registration fee
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the amount is not positive.
    pub fn registration_fee_income(
        amount: Decimal,
        description: String,
        transaction_date: NaiveDate,
        student_id: Option<StudentId>,
        created_by: Option<UserId>,
    ) -> Result<Self, DomainError> {
        Self::new(CreateTransactionData {
            transaction_type: TransactionType::Income,
            source: TransactionSource::RegistrationFee,
            amount,
            description: Some(description),
            motif: None,
            transaction_date,
            student_id,
            payment_id: None,
            created_by,
        })
    }

    /// Restore a Transaction from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: TransactionId,
        transaction_type: TransactionType,
        source: TransactionSource,
        amount: Decimal,
        description: Option<String>,
        motif: Option<String>,
        transaction_date: NaiveDate,
        student_id: Option<StudentId>,
        payment_id: Option<PaymentId>,
        created_by: Option<UserId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            transaction_type,
            source,
            amount,
            description,
            motif,
            transaction_date,
            student_id,
            payment_id,
            created_by,
            created_at,
            updated_at,
        }
    }

    /// Signed contribution to the balance
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    #[must_use]
    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    #[must_use]
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    #[must_use]
    pub fn source(&self) -> TransactionSource {
        self.source
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn motif(&self) -> Option<&str> {
        self.motif.as_deref()
    }

    #[must_use]
    pub fn transaction_date(&self) -> NaiveDate {
        self.transaction_date
    }

    #[must_use]
    pub fn student_id(&self) -> Option<&StudentId> {
        self.student_id.as_ref()
    }

    #[must_use]
    pub fn payment_id(&self) -> Option<&PaymentId> {
        self.payment_id.as_ref()
    }

    #[must_use]
    pub fn created_by(&self) -> Option<&UserId> {
        self.created_by.as_ref()
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

    fn expense(amount: Decimal) -> Result<Transaction, DomainError> {
        Transaction::new(CreateTransactionData {
            transaction_type: TransactionType::Expense,
            source: TransactionSource::ManualExpense,
            amount,
            description: Some("Fournitures".into()),
            motif: Some("Papeterie".into()),
            transaction_date: NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
            student_id: None,
            payment_id: None,
            created_by: None,
        })
    }

    #[test]
    fn test_expense_is_negative_in_balance() {
        assert_eq!(expense(dec!(250)).unwrap().signed_amount(), dec!(-250));
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert!(expense(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_source_must_match_type() {
        let result = Transaction::new(CreateTransactionData {
            transaction_type: TransactionType::Expense,
            source: TransactionSource::RegistrationFee,
            amount: dec!(10),
            description: None,
            motif: None,
            transaction_date: NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
            student_id: None,
            payment_id: None,
            created_by: None,
        });
        assert!(result.is_err());
    }
}
