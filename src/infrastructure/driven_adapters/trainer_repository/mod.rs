//! Trainer Repository
//!
//! PostgreSQL adapter for the trainer gateway.

mod postgres;

pub use postgres::PostgresTrainerRepository;
