//! Time source
//!
//! The store never reads the system time directly so that item timestamps and
//! the initial month can be controlled in tests and supplied by the browser.

use crate::types::{Period, Timestamp};
use std::cell::Cell;

pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now(&self) -> Timestamp;

    /// Calendar month of `now()` in local time
    fn current_period(&self) -> Period;
}

/// Local system time via chrono
#[cfg(feature = "clock")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "clock")]
impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now().timestamp_millis()
    }

    fn current_period(&self) -> Period {
        use chrono::Datelike;

        let today = chrono::Local::now();
        Period {
            year: today.year(),
            month: today.month0(),
        }
    }
}

/// Hand-driven clock
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Timestamp>,
    period: Cell<Period>,
}

impl ManualClock {
    pub fn new(now: Timestamp, period: Period) -> Self {
        Self {
            now: Cell::new(now),
            period: Cell::new(period),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    pub fn advance(&self, millis: Timestamp) {
        self.now.set(self.now.get() + millis);
    }

    pub fn set_period(&self, period: Period) {
        self.period.set(period);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }

    fn current_period(&self) -> Period {
        self.period.get()
    }
}
