//! API Middleware
//!
//! Authentication extractor, role guards and request ids.

pub mod auth;
pub mod request_id;

pub use auth::{AuthUser, FINANCE_ROLES};
pub use request_id::{RequestId, REQUEST_ID_HEADER};
