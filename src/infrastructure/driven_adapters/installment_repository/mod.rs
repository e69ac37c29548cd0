//! Installment Repository
//!
//! PostgreSQL adapter for the installment gateway.

mod postgres;

pub use postgres::PostgresInstallmentRepository;
pub(crate) use postgres::insert_installments;
