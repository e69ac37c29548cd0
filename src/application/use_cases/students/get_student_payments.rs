//! Get Student Payments Use Case
//!
//! Payment history of a student with the total received.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::gateways::{PaymentRepository, StudentRepository};
use crate::domain::models::ids::StudentId;
use crate::domain::models::payment::Payment;
use crate::shared::errors::UseCaseError;

/// Payments of one student
#[derive(Debug, Clone)]
pub struct StudentPayments {
    pub payments: Vec<Payment>,
    pub total_paid: Decimal,
}

pub struct GetStudentPaymentsUseCase {
    student_repository: Arc<dyn StudentRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
}

impl GetStudentPaymentsUseCase {
    #[must_use]
    pub fn new(
        student_repository: Arc<dyn StudentRepository>,
        payment_repository: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            student_repository,
            payment_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the student doesn't exist.
    pub async fn execute(&self, id: &StudentId) -> Result<StudentPayments, UseCaseError> {
        tracing::debug!(student_id = %id, "Getting student payments");

        if self.student_repository.find_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found("Student", id));
        }
        let payments = self.payment_repository.find_by_student(id).await?;
        let total_paid = payments.iter().map(Payment::amount).sum();

        Ok(StudentPayments { payments, total_paid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::payment_repository::MockPaymentRepository;
    use crate::domain::gateways::student_repository::MockStudentRepository;
    use crate::domain::models::ids::EnrollmentId;
    use crate::domain::models::payment::{CreatePaymentData, PaymentMethod};
    use crate::domain::models::student::{CreateStudentData, Student};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn payment(student_id: StudentId, amount: Decimal) -> Payment {
        Payment::new(CreatePaymentData {
            installment_id: None,
            enrollment_id: EnrollmentId::new(),
            student_id,
            amount,
            payment_method: PaymentMethod::Cash,
            payment_date: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            reference: None,
            received_by: None,
            notes: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_sum_payments() {
        let student = Student::new(CreateStudentData {
            first_name: "Amel".into(),
            last_name: "Saidi".into(),
            birth_date: None,
            phone: None,
            email: None,
            address: None,
        })
        .unwrap();
        let id = *student.id();

        let mut students = MockStudentRepository::new();
        students
            .expect_find_by_id()
            .returning(move |_| Ok(Some(student.clone())));
        let mut payments = MockPaymentRepository::new();
        payments
            .expect_find_by_student()
            .returning(move |sid| Ok(vec![payment(*sid, dec!(3000)), payment(*sid, dec!(1500.50))]));

        let use_case = GetStudentPaymentsUseCase::new(Arc::new(students), Arc::new(payments));
        let result = use_case.execute(&id).await.unwrap();

        assert_eq!(result.payments.len(), 2);
        assert_eq!(result.total_paid, dec!(4500.50));
    }
}
