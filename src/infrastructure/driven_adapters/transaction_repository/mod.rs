//! Transaction Repository
//!
//! PostgreSQL adapter for the transaction gateway.

mod postgres;

pub use postgres::PostgresTransactionRepository;
pub(crate) use postgres::insert_transaction;
