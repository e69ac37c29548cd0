//! User Repository
//!
//! PostgreSQL adapter for the user gateway.

mod postgres;

pub use postgres::PostgresUserRepository;
