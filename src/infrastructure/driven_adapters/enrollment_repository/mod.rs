//! Enrollment Repository
//!
//! PostgreSQL adapter for the enrollment gateway.

mod postgres;

pub use postgres::PostgresEnrollmentRepository;
pub(crate) use postgres::insert_enrollment;
