//! Session Repository
//!
//! PostgreSQL adapter for the session gateway.

mod postgres;

pub use postgres::PostgresSessionRepository;
