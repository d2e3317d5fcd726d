//! Reminder notifications.
//!
//! Scheduling is split in two: [`plan_notifications`] is a pure function from
//! the reminder map and "now" to the list of timers that should exist, and
//! [`ReminderScheduler`] applies such a plan through an injected
//! [`Scheduler`]. Every change replaces the whole plan: all outstanding
//! timers are cancelled and the plan is armed from scratch.

use anyhow::Result;
use chrono::{DateTime, Duration, Local, TimeZone};
use log::{debug, info, warn};
use shared::ReminderMap;
use std::rc::Rc;

/// Title used when a reminder somehow has no title
pub const FALLBACK_TITLE: &str = "Reminder";

/// One-shot timer facility of the host
pub trait Scheduler {
    /// Run `callback` once after `delay`
    fn arm(&self, delay: std::time::Duration, callback: Box<dyn FnOnce()>);

    /// Cancel every timer armed so far
    fn cancel_all(&self);
}

/// Notification facility of the host
pub trait NotificationHost {
    /// Whether the host supports notifications and the user granted permission
    fn can_notify(&self) -> bool;

    /// Emit a system notification
    fn show(&self, title: &str, body: &str) -> Result<()>;

    /// Blocking alert dialog, used when notifications are unavailable
    fn alert(&self, message: &str);
}

/// How a reminder ended up being delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Notification,
    Alert,
}

/// Deliver a reminder, falling back to an alert when notifications are
/// unavailable or fail
pub fn deliver(host: &dyn NotificationHost, title: &str, body: &str) -> Delivery {
    let title = if title.trim().is_empty() { FALLBACK_TITLE } else { title };

    if host.can_notify() {
        match host.show(title, body) {
            Ok(()) => return Delivery::Notification,
            Err(e) => warn!("Notification failed, falling back to alert: {}", e),
        }
    }

    host.alert(&format!("{}\n{}", title, body));
    Delivery::Alert
}

/// Body text shown for a reminder due at `due`
pub fn notification_body(due: &DateTime<Local>) -> String {
    format!("Reminder at {}", due.format("%d %B %Y %H:%M"))
}

/// A timer that should be armed for one reminder
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedNotification {
    pub reminder_id: String,
    pub title: String,
    pub due: DateTime<Local>,
    pub delay: std::time::Duration,
}

/// Work out which reminders get a timer
///
/// A reminder is planned only if it has a well-formed time, its due instant
/// (date-key + time in the local zone) lies in the future, and it is less
/// than `horizon` away. Everything else is skipped, not queued for later.
pub fn plan_notifications(
    reminders: &ReminderMap,
    now: DateTime<Local>,
    horizon: Duration,
) -> Vec<PlannedNotification> {
    let mut plan = Vec::new();

    for (date_key, items) in reminders {
        let Some(date) = date_key.to_date() else {
            debug!("Skipping reminders under unparseable key '{}'", date_key);
            continue;
        };

        for reminder in items {
            let Some(time) = reminder.time_of_day() else {
                continue;
            };
            // Wall-clock times that do not exist (DST gap) are skipped
            let Some(due) = Local.from_local_datetime(&date.and_time(time)).earliest() else {
                continue;
            };

            let delta = due - now;
            if delta <= Duration::zero() || delta >= horizon {
                continue;
            }
            let Ok(delay) = delta.to_std() else {
                continue;
            };

            plan.push(PlannedNotification {
                reminder_id: reminder.id.clone(),
                title: reminder.title.clone(),
                due,
                delay,
            });
        }
    }

    plan
}

/// Keeps the host's timers in line with the reminder map
pub struct ReminderScheduler {
    scheduler: Rc<dyn Scheduler>,
    host: Rc<dyn NotificationHost>,
    horizon: Duration,
}

impl ReminderScheduler {
    pub fn new(scheduler: Rc<dyn Scheduler>, host: Rc<dyn NotificationHost>, horizon: Duration) -> Self {
        Self { scheduler, host, horizon }
    }

    /// Cancel all timers and arm one per planned reminder.
    /// Returns the number of timers armed.
    pub fn reschedule(&self, reminders: &ReminderMap, now: DateTime<Local>) -> usize {
        self.scheduler.cancel_all();

        let plan = plan_notifications(reminders, now, self.horizon);
        let armed = plan.len();

        for planned in plan {
            let host = Rc::clone(&self.host);
            let body = notification_body(&planned.due);
            let title = planned.title;
            self.scheduler.arm(
                planned.delay,
                Box::new(move || {
                    deliver(host.as_ref(), &title, &body);
                }),
            );
        }

        info!("🔔 Armed {} reminder timer(s)", armed);
        armed
    }
}
