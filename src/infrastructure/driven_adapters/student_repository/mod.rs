//! Student Repository
//!
//! PostgreSQL adapter for the student gateway.

mod postgres;

pub use postgres::PostgresStudentRepository;
pub(crate) use postgres::{insert_student, settle_registration_fee};
