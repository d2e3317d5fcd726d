//! Test doubles for the host capabilities.

use crate::clock::FixedClock;
use crate::config::PlannerConfig;
use crate::notifications::{NotificationHost, Scheduler};
use crate::storage::InMemoryStore;
use anyhow::{anyhow, Result};
use chrono::{Local, TimeZone};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Scheduler that records armed timers and fires them on demand
#[derive(Default)]
pub struct RecordingScheduler {
    armed: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
    cancel_count: Cell<usize>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays of the timers currently armed, in arming order
    pub fn delays(&self) -> Vec<Duration> {
        self.armed.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn cancel_count(&self) -> usize {
        self.cancel_count.get()
    }

    /// Run every armed callback as if its delay had elapsed
    pub fn fire_all(&self) {
        let armed: Vec<_> = self.armed.borrow_mut().drain(..).collect();
        for (_, callback) in armed {
            callback();
        }
    }
}

impl Scheduler for RecordingScheduler {
    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        self.armed.borrow_mut().push((delay, callback));
    }

    fn cancel_all(&self) {
        self.armed.borrow_mut().clear();
        self.cancel_count.set(self.cancel_count.get() + 1);
    }
}

/// Notification host that records what it was asked to show
pub struct RecordingHost {
    permitted: bool,
    fail_show: bool,
    shown: RefCell<Vec<(String, String)>>,
    alerts: RefCell<Vec<String>>,
}

impl RecordingHost {
    fn with(permitted: bool, fail_show: bool) -> Self {
        Self {
            permitted,
            fail_show,
            shown: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }

    pub fn permitted() -> Self {
        Self::with(true, false)
    }

    pub fn denied() -> Self {
        Self::with(false, false)
    }

    /// Permission granted but every notification throws
    pub fn failing() -> Self {
        Self::with(true, true)
    }

    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl NotificationHost for RecordingHost {
    fn can_notify(&self) -> bool {
        self.permitted
    }

    fn show(&self, title: &str, body: &str) -> Result<()> {
        if self.fail_show {
            return Err(anyhow!("notification constructor threw"));
        }
        self.shown.borrow_mut().push((title.to_string(), body.to_string()));
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Store, clock pinned to 15 June 2026 10:00 local, and default config
pub struct TestEnvironment {
    pub store: Rc<InMemoryStore>,
    pub clock: Rc<FixedClock>,
    pub config: PlannerConfig,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }

    pub fn with_store(store: InMemoryStore) -> Self {
        let now = Local.with_ymd_and_hms(2026, 6, 15, 10, 0, 0).unwrap();
        Self {
            store: Rc::new(store),
            clock: Rc::new(FixedClock::new(now)),
            config: PlannerConfig::default(),
        }
    }
}
