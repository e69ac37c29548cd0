//! Payment Plan Repository
//!
//! PostgreSQL adapter for the payment plan gateway.

mod postgres;

pub use postgres::PostgresPaymentPlanRepository;
