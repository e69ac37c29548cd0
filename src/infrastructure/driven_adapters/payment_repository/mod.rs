//! Payment Repository
//!
//! PostgreSQL adapter for the payment gateway.

mod postgres;

pub use postgres::PostgresPaymentRepository;
pub(crate) use postgres::insert_payment;
