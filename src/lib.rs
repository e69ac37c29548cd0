//! School Back Office API
//!
//! A Rust-based service for managing students, trainers, courses, sessions,
//! registrations, enrollments and their payment schedules, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
