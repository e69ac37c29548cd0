//! Pay Installment Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::gateways::{Clock, EnrollmentRepository, InstallmentRepository, RecordedPayment};
use crate::domain::models::enrollment::Enrollment;
use crate::domain::models::ids::{InstallmentId, UserId};
use crate::domain::models::installment::Installment;
use crate::domain::models::payment::{CreatePaymentData, Payment, PaymentMethod};
use crate::domain::models::transaction::Transaction;
use crate::shared::errors::{DomainError, UseCaseError};

/// Money received at the desk
#[derive(Debug, Clone)]
pub struct PaymentInput {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    /// Defaults to today
    pub payment_date: Option<NaiveDate>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

/// Apply `amount` of `input` to one installment and build the rows to store
pub(super) fn record_payment(
    installment: Installment,
    enrollment: &Enrollment,
    amount: Decimal,
    input: &PaymentInput,
    received_by: Option<UserId>,
    today: NaiveDate,
) -> Result<RecordedPayment, DomainError> {
    let payment_date = input.payment_date.unwrap_or(today);
    let previous_paid_amount = installment.paid_amount();
    let installment = installment.apply_payment(amount, input.payment_method, payment_date, today)?;
    let payment = Payment::new(CreatePaymentData {
        installment_id: Some(*installment.id()),
        enrollment_id: *enrollment.id(),
        student_id: *enrollment.student_id(),
        amount,
        payment_method: input.payment_method,
        payment_date,
        reference: input.reference.clone(),
        received_by,
        notes: input.notes.clone(),
    })?;
    let transaction = Transaction::installment_income(
        amount,
        format!("Paiement échéance n°{}", installment.installment_number()),
        payment_date,
        *enrollment.student_id(),
        *payment.id(),
        received_by,
    )?;
    Ok(RecordedPayment {
        installment,
        previous_paid_amount,
        payment,
        transaction,
    })
}

pub struct PayInstallmentUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    clock: Arc<dyn Clock>,
}

impl PayInstallmentUseCase {
    #[must_use]
    pub fn new(
        installment_repository: Arc<dyn InstallmentRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            installment_repository,
            enrollment_repository,
            clock,
        }
    }

    /// Execute the use case
    ///
    /// Stores the updated installment, the payment and its ledger entry together.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the installment doesn't exist.
    /// Returns `UseCaseError::Domain` if the installment is cancelled or paid,
    /// or the amount is not positive or exceeds what is left.
    pub async fn execute(
        &self,
        id: &InstallmentId,
        input: PaymentInput,
        received_by: Option<UserId>,
    ) -> Result<Installment, UseCaseError> {
        tracing::info!(installment_id = %id, amount = %input.amount, method = %input.payment_method, "Recording installment payment");

        let installment = self
            .installment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Installment", id))?;
        let enrollment = self
            .enrollment_repository
            .find_by_id(installment.enrollment_id())
            .await?
            .ok_or_else(|| UseCaseError::not_found("Enrollment", installment.enrollment_id()))?;

        let recorded = record_payment(
            installment,
            &enrollment,
            input.amount,
            &input,
            received_by,
            self.clock.today(),
        )?;
        let updated = recorded.installment.clone();
        self.installment_repository.record_payments(vec![recorded]).await?;

        tracing::info!(
            installment_id = %id,
            paid_amount = %updated.paid_amount(),
            status = %updated.status(),
            "Installment payment recorded"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures;
    use crate::domain::finance::ScheduledInstallment;
    use crate::domain::gateways::enrollment_repository::MockEnrollmentRepository;
    use crate::domain::gateways::installment_repository::MockInstallmentRepository;
    use crate::domain::models::ids::{CourseId, StudentId};
    use crate::domain::models::installment::InstallmentStatus;
    use crate::domain::models::transaction::TransactionSource;
    use crate::shared::errors::RepositoryError;
    use rust_decimal_macros::dec;

    fn input(amount: Decimal) -> PaymentInput {
        PaymentInput {
            amount,
            payment_method: PaymentMethod::Cash,
            payment_date: None,
            reference: None,
            notes: None,
        }
    }

    fn use_case(installments: MockInstallmentRepository) -> (PayInstallmentUseCase, InstallmentId) {
        let enrollment = fixtures::enrollment(StudentId::new(), CourseId::new(), fixtures::date(2025, 9, 1));
        let installment = Installment::new(
            *enrollment.id(),
            ScheduledInstallment {
                number: 2,
                amount: dec!(3000),
                due_date: fixtures::date(2025, 12, 5),
                notes: None,
            },
            fixtures::date(2025, 11, 10),
        )
        .unwrap();
        let id = *installment.id();

        let mut installments = installments;
        installments
            .expect_find_by_id()
            .returning(move |_| Ok(Some(installment.clone())));
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_by_id()
            .returning(move |_| Ok(Some(enrollment.clone())));

        let use_case = PayInstallmentUseCase::new(Arc::new(installments), Arc::new(enrollments), Arc::new(fixtures::clock()));
        (use_case, id)
    }

    #[tokio::test]
    async fn partial_payment_writes_payment_and_ledger_entry() {
        let mut installments = MockInstallmentRepository::new();
        installments
            .expect_record_payments()
            .times(1)
            .withf(|entries| {
                let entry = &entries[0];
                entries.len() == 1
                    && entry.previous_paid_amount == Decimal::ZERO
                    && entry.payment.amount() == dec!(1000)
                    && entry.transaction.source() == TransactionSource::PaymentInstallment
                    && entry.transaction.payment_id() == Some(entry.payment.id())
            })
            .returning(|_| Ok(()));

        let (use_case, id) = use_case(installments);
        let updated = use_case.execute(&id, input(dec!(1000)), None).await.unwrap();

        assert_eq!(updated.paid_amount(), dec!(1000));
        assert_eq!(updated.status(), InstallmentStatus::Partial);
        assert!(updated.paid_date().is_none());
    }

    #[tokio::test]
    async fn overpayment_is_rejected_before_writing() {
        let mut installments = MockInstallmentRepository::new();
        installments.expect_record_payments().never();

        let (use_case, id) = use_case(installments);
        let result = use_case.execute(&id, input(dec!(3500)), None).await;

        assert!(matches!(
            result,
            Err(UseCaseError::Domain(DomainError::PaymentExceedsRemaining { .. }))
        ));
    }

    #[tokio::test]
    async fn full_payment_sets_paid_date() {
        let mut installments = MockInstallmentRepository::new();
        installments.expect_record_payments().returning(|_| Ok(()));

        let (use_case, id) = use_case(installments);
        let mut full = input(dec!(3000));
        full.payment_date = Some(fixtures::date(2025, 11, 8));
        let updated = use_case.execute(&id, full, None).await.unwrap();

        assert_eq!(updated.status(), InstallmentStatus::Paid);
        assert_eq!(updated.paid_date(), Some(fixtures::date(2025, 11, 8)));
    }

    #[tokio::test]
    async fn concurrent_payment_surfaces_as_conflict() {
        let mut installments = MockInstallmentRepository::new();
        installments
            .expect_record_payments()
            .returning(|_| Err(RepositoryError::Conflict("installment was paid concurrently".into())));

        let (use_case, id) = use_case(installments);
        let result = use_case.execute(&id, input(dec!(600)), None).await;

        let err = result.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
    }
}
