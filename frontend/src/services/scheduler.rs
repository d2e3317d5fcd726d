//! `setTimeout`-backed scheduler for reminder timers.
//!
//! Browsers clamp delays above `i32::MAX` milliseconds (about 24.8 days) and
//! fire them immediately, while reminders may be up to 30 days out. Longer
//! delays are therefore armed as a chain of hops, each re-arming the rest.

use gloo::timers::callback::Timeout;
use planner_backend::Scheduler;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Largest delay a single `setTimeout` honours
const MAX_TIMEOUT_MS: u64 = i32::MAX as u64;

struct Timers {
    pending: RefCell<Vec<Timeout>>,
    /// Bumped by every `cancel_all`; hops from an older generation stop
    generation: Cell<u64>,
    max_step_ms: u64,
}

pub struct BrowserScheduler {
    timers: Rc<Timers>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::with_max_step(MAX_TIMEOUT_MS)
    }

    /// Scheduler whose single timers never wait longer than `max_step_ms`
    pub fn with_max_step(max_step_ms: u64) -> Self {
        Self {
            timers: Rc::new(Timers {
                pending: RefCell::new(Vec::new()),
                generation: Cell::new(0),
                max_step_ms: max_step_ms.clamp(1, MAX_TIMEOUT_MS),
            }),
        }
    }
}

impl Default for BrowserScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for BrowserScheduler {
    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let remaining = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        arm_hop(&self.timers, self.timers.generation.get(), remaining, callback);
    }

    fn cancel_all(&self) {
        self.timers.generation.set(self.timers.generation.get() + 1);
        // Dropping a Timeout clears it
        self.timers.pending.borrow_mut().clear();
    }
}

/// Split a remaining delay into the next timer's wait and what is left after it
fn next_hop(remaining_ms: u64, max_step_ms: u64) -> (u64, u64) {
    let step = remaining_ms.min(max_step_ms);
    (step, remaining_ms - step)
}

fn arm_hop(timers: &Rc<Timers>, generation: u64, remaining_ms: u64, callback: Box<dyn FnOnce()>) {
    let (step, rest) = next_hop(remaining_ms, timers.max_step_ms);
    let weak: Weak<Timers> = Rc::downgrade(timers);

    let timeout = Timeout::new(step as u32, move || {
        let Some(timers) = weak.upgrade() else {
            return;
        };
        if timers.generation.get() != generation {
            return;
        }
        if rest == 0 {
            callback();
        } else {
            arm_hop(&timers, generation, rest, callback);
        }
    });
    timers.pending.borrow_mut().push(timeout);
}
