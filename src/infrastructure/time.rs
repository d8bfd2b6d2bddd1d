// src/infrastructure/time.rs
use chrono::{DateTime, Utc};

use crate::application::ports::time::Clock;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
