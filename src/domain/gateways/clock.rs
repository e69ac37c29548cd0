//! Clock Gateway
//!
//! Installment statuses depend on the current date, so use cases read it
//! through this port.

use chrono::{DateTime, NaiveDate, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
