//! Course Repository
//!
//! PostgreSQL adapter for the course gateway.

mod postgres;

pub use postgres::PostgresCourseRepository;
