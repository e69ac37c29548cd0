//! Student Use Cases

mod create_student;
mod delete_student;
mod get_student_by_id;
mod get_student_enrollments;
mod get_student_payments;
mod list_students;
mod update_student;

use std::sync::Arc;

pub use create_student::CreateStudentUseCase;
pub use delete_student::DeleteStudentUseCase;
pub use get_student_by_id::GetStudentByIdUseCase;
pub use get_student_enrollments::GetStudentEnrollmentsUseCase;
pub use get_student_payments::{GetStudentPaymentsUseCase, StudentPayments};
pub use list_students::ListStudentsUseCase;
pub use update_student::UpdateStudentUseCase;

use crate::domain::gateways::{EnrollmentRepository, PaymentRepository, StudentRepository};

/// Student use cases, wired once and shared by the handlers
pub struct StudentUseCases {
    pub create: CreateStudentUseCase,
    pub list: ListStudentsUseCase,
    pub get: GetStudentByIdUseCase,
    pub update: UpdateStudentUseCase,
    pub delete: DeleteStudentUseCase,
    pub enrollments: GetStudentEnrollmentsUseCase,
    pub payments: GetStudentPaymentsUseCase,
}

impl StudentUseCases {
    #[must_use]
    pub fn new(
        students: &Arc<dyn StudentRepository>,
        enrollments: &Arc<dyn EnrollmentRepository>,
        payments: &Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            create: CreateStudentUseCase::new(students.clone()),
            list: ListStudentsUseCase::new(students.clone()),
            get: GetStudentByIdUseCase::new(students.clone()),
            update: UpdateStudentUseCase::new(students.clone()),
            delete: DeleteStudentUseCase::new(students.clone()),
            enrollments: GetStudentEnrollmentsUseCase::new(students.clone(), enrollments.clone()),
            payments: GetStudentPaymentsUseCase::new(students.clone(), payments.clone()),
        }
    }
}
