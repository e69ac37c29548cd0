//! Pay Enrollment Use Case
//!
//! One amount spread over the enrollment's open installments, oldest first.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::pay_installment::{record_payment, PaymentInput};
use crate::domain::finance::allocate_payment;
use crate::domain::gateways::{Clock, EnrollmentRepository, InstallmentRepository};
use crate::domain::models::ids::{EnrollmentId, UserId};
use crate::domain::models::installment::Installment;
use crate::domain::models::payment::Payment;
use crate::shared::errors::UseCaseError;

/// Outcome of an enrollment-level payment
#[derive(Debug, Clone)]
pub struct EnrollmentPayment {
    pub payments: Vec<Payment>,
    /// Installments touched, in allocation order
    pub installments: Vec<Installment>,
    pub total_applied: Decimal,
    /// Left over once every installment is paid; not recorded
    pub remaining_credit: Decimal,
}

pub struct PayEnrollmentUseCase {
    installment_repository: Arc<dyn InstallmentRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    clock: Arc<dyn Clock>,
}

impl PayEnrollmentUseCase {
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
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the enrollment doesn't exist.
    /// Returns `UseCaseError::Domain` for a non-positive amount or when
    /// nothing is left to pay.
    pub async fn execute(
        &self,
        enrollment_id: &EnrollmentId,
        input: PaymentInput,
        received_by: Option<UserId>,
    ) -> Result<EnrollmentPayment, UseCaseError> {
        tracing::info!(enrollment_id = %enrollment_id, amount = %input.amount, "Recording enrollment payment");

        let enrollment = self
            .enrollment_repository
            .find_by_id(enrollment_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Enrollment", enrollment_id))?;
        let installments = self.installment_repository.find_by_enrollment(enrollment_id).await?;
        let plan = allocate_payment(&installments, input.amount)?;

        let today = self.clock.today();
        let mut by_id: HashMap<_, _> = installments.into_iter().map(|i| (*i.id(), i)).collect();
        let mut recorded = Vec::with_capacity(plan.allocations.len());
        for allocation in &plan.allocations {
            let installment = by_id
                .remove(&allocation.installment_id)
                .ok_or_else(|| UseCaseError::not_found("Installment", allocation.installment_id))?;
            recorded.push(record_payment(
                installment,
                &enrollment,
                allocation.amount,
                &input,
                received_by,
                today,
            )?);
        }

        let result = EnrollmentPayment {
            payments: recorded.iter().map(|r| r.payment.clone()).collect(),
            installments: recorded.iter().map(|r| r.installment.clone()).collect(),
            total_applied: plan.allocations.iter().map(|a| a.amount).sum(),
            remaining_credit: plan.remaining_credit,
        };
        self.installment_repository.record_payments(recorded).await?;

        tracing::info!(
            enrollment_id = %enrollment_id,
            installments = result.installments.len(),
            remaining_credit = %result.remaining_credit,
            "Enrollment payment recorded"
        );
        Ok(result)
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
    use crate::domain::models::payment::PaymentMethod;
    use rust_decimal_macros::dec;

    fn schedule(enrollment_id: EnrollmentId) -> Vec<Installment> {
        [(2, 10, 5), (1, 9, 5), (3, 11, 5)]
            .into_iter()
            .map(|(number, month, day)| {
                Installment::new(
                    enrollment_id,
                    ScheduledInstallment {
                        number,
                        amount: dec!(1000),
                        due_date: fixtures::date(2025, month, day),
                        notes: None,
                    },
                    fixtures::date(2025, 11, 10),
                )
                .unwrap()
            })
            .collect()
    }

    fn use_case(installments: MockInstallmentRepository) -> (PayEnrollmentUseCase, EnrollmentId) {
        let enrollment = fixtures::enrollment(StudentId::new(), CourseId::new(), fixtures::date(2025, 9, 1));
        let enrollment_id = *enrollment.id();
        let rows = schedule(enrollment_id);

        let mut installments = installments;
        installments
            .expect_find_by_enrollment()
            .returning(move |_| Ok(rows.clone()));
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_by_id()
            .returning(move |_| Ok(Some(enrollment.clone())));
        let use_case = PayEnrollmentUseCase::new(Arc::new(installments), Arc::new(enrollments), Arc::new(fixtures::clock()));
        (use_case, enrollment_id)
    }

    fn input(amount: Decimal) -> PaymentInput {
        PaymentInput {
            amount,
            payment_method: PaymentMethod::BankTransfer,
            payment_date: None,
            reference: Some("VIR-2025-114".into()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn fills_oldest_installments_first() {
        let mut installments = MockInstallmentRepository::new();
        installments
            .expect_record_payments()
            .times(1)
            .withf(|entries| entries.len() == 2)
            .returning(|_| Ok(()));

        let (use_case, enrollment_id) = use_case(installments);
        let result = use_case.execute(&enrollment_id, input(dec!(1500)), None).await.unwrap();

        let numbers: Vec<i32> = result.installments.iter().map(Installment::installment_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(result.installments[0].status(), InstallmentStatus::Paid);
        assert_eq!(result.installments[1].paid_amount(), dec!(500));
        assert_eq!(result.payments[1].amount(), dec!(500));
        assert_eq!(result.total_applied, dec!(1500));
        assert_eq!(result.remaining_credit, Decimal::ZERO);
    }

    #[tokio::test]
    async fn returns_unapplied_credit() {
        let mut installments = MockInstallmentRepository::new();
        installments.expect_record_payments().returning(|_| Ok(()));

        let (use_case, enrollment_id) = use_case(installments);
        let result = use_case.execute(&enrollment_id, input(dec!(3200)), None).await.unwrap();

        assert_eq!(result.installments.len(), 3);
        assert_eq!(result.total_applied, dec!(3000));
        assert_eq!(result.remaining_credit, dec!(200));
    }
}
