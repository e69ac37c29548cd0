//! Wall clock adapter

use chrono::{DateTime, Utc};

use crate::domain::gateways::Clock;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
