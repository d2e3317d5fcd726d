//! Clock abstraction so "now" and "today" can be pinned in tests.

use chrono::{DateTime, Duration, Local, NaiveDate};
use std::cell::Cell;

pub trait Clock {
    /// Current local wall-clock time
    fn now(&self) -> DateTime<Local>;

    /// Today's date in the local time zone
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current time in epoch milliseconds
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}
