//! Registration Repository
//!
//! PostgreSQL adapter for the registration gateway.

mod postgres;

pub use postgres::PostgresRegistrationRepository;
