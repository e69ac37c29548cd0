//! Get Dashboard Stats Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::finance::FinanceStats;
use crate::domain::gateways::{
    Clock, CourseRepository, EnrollmentRepository, InstallmentRepository, RegistrationRepository,
    ScheduleFilter, SessionRepository, StudentRepository, TransactionFilter, TransactionRepository,
};
use crate::domain::models::enrollment::EnrollmentStatus;
use crate::domain::models::registration::RegistrationStatus;
use crate::domain::models::session::SessionStatus;
use crate::shared::errors::UseCaseError;

/// Headline numbers of the back office home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_students: i64,
    pub active_courses: i64,
    pub active_enrollments: i64,
    pub pending_registrations: i64,
    pub upcoming_sessions: i64,
    pub total_revenue: Decimal,
    pub total_expected: Decimal,
    pub collection_rate: u32,
    pub overdue_count: usize,
    pub overdue_amount: Decimal,
}

/// Repositories read by the dashboard
pub struct DashboardDeps {
    pub students: Arc<dyn StudentRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub installments: Arc<dyn InstallmentRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct GetDashboardStatsUseCase {
    students: Arc<dyn StudentRepository>,
    courses: Arc<dyn CourseRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionRepository>,
    installments: Arc<dyn InstallmentRepository>,
    transactions: Arc<dyn TransactionRepository>,
    clock: Arc<dyn Clock>,
}

impl GetDashboardStatsUseCase {
    #[must_use]
    pub fn new(deps: &DashboardDeps) -> Self {
        Self {
            students: deps.students.clone(),
            courses: deps.courses.clone(),
            enrollments: deps.enrollments.clone(),
            registrations: deps.registrations.clone(),
            sessions: deps.sessions.clone(),
            installments: deps.installments.clone(),
            transactions: deps.transactions.clone(),
            clock: deps.clock.clone(),
        }
    }

    /// Execute the use case
    ///
    /// Revenue is the ledger's total income.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<DashboardStats, UseCaseError> {
        let (students, courses, enrollments, registrations, sessions) = tokio::try_join!(
            self.students.count(),
            self.courses.count_active(),
            self.enrollments.count_by_status(EnrollmentStatus::Active),
            self.registrations.count_by_status(RegistrationStatus::PendingPayment),
            self.sessions.count_by_status(SessionStatus::Upcoming),
        )?;
        let (lines, transactions) = tokio::try_join!(
            self.installments.find_lines(ScheduleFilter::default()),
            self.transactions.find_all(TransactionFilter::default()),
        )?;
        let finance = FinanceStats::build(lines, &transactions, self.clock.today());

        Ok(DashboardStats {
            total_students: students,
            active_courses: courses,
            active_enrollments: enrollments,
            pending_registrations: registrations,
            upcoming_sessions: sessions,
            total_revenue: finance.ledger.total_income,
            total_expected: finance.schedule.total_amount,
            collection_rate: finance.schedule.collection_rate,
            overdue_count: finance.overdue_count,
            overdue_amount: finance.overdue_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures;
    use crate::domain::gateways::course_repository::MockCourseRepository;
    use crate::domain::gateways::enrollment_repository::MockEnrollmentRepository;
    use crate::domain::gateways::installment_repository::MockInstallmentRepository;
    use crate::domain::gateways::registration_repository::MockRegistrationRepository;
    use crate::domain::gateways::session_repository::MockSessionRepository;
    use crate::domain::gateways::student_repository::MockStudentRepository;
    use crate::domain::gateways::transaction_repository::MockTransactionRepository;
    use crate::domain::models::transaction::Transaction;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn counts_and_revenue_are_combined() {
        let mut students = MockStudentRepository::new();
        students.expect_count().returning(|| Ok(42));
        let mut courses = MockCourseRepository::new();
        courses.expect_count_active().returning(|| Ok(6));
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_count_by_status()
            .withf(|s| *s == EnrollmentStatus::Active)
            .returning(|_| Ok(38));
        let mut registrations = MockRegistrationRepository::new();
        registrations.expect_count_by_status().returning(|_| Ok(4));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_count_by_status().returning(|_| Ok(2));
        let mut installments = MockInstallmentRepository::new();
        installments.expect_find_lines().returning(|_| Ok(Vec::new()));
        let mut transactions = MockTransactionRepository::new();
        transactions.expect_find_all().returning(|_| {
            Ok(vec![Transaction::registration_fee_income(
                dec!(1500),
                "Frais d'inscription".into(),
                fixtures::date(2025, 11, 3),
                None,
                None,
            )
            .unwrap()])
        });

        let stats = GetDashboardStatsUseCase::new(&DashboardDeps {
            students: Arc::new(students),
            courses: Arc::new(courses),
            enrollments: Arc::new(enrollments),
            registrations: Arc::new(registrations),
            sessions: Arc::new(sessions),
            installments: Arc::new(installments),
            transactions: Arc::new(transactions),
            clock: Arc::new(fixtures::clock()),
        })
        .execute()
        .await
        .unwrap();

        assert_eq!(stats.total_students, 42);
        assert_eq!(stats.active_enrollments, 38);
        assert_eq!(stats.pending_registrations, 4);
        assert_eq!(stats.total_revenue, dec!(1500));
        assert_eq!(stats.collection_rate, 0);
    }
}
