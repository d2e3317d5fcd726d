//! Reminder service: the calendar's selected day and the per-day reminders.
//!
//! The reminder map is persisted as one JSON object keyed by `YYYY-MM-DD`.
//! A key never maps to an empty list: removing the last reminder of a day
//! removes the day, and empty lists found in stored data are pruned on load.
//! Every change to the map is followed by a full reschedule of timers.

use super::calendar::CalendarService;
use super::generate_id;
use super::validation::{normalize_time, validate_text, ValidationError};
use crate::clock::Clock;
use crate::config::PlannerConfig;
use crate::notifications::{NotificationHost, ReminderScheduler, Scheduler};
use crate::storage::{self, KeyValueStore};
use chrono::{Datelike, NaiveDate};
use log::{debug, error, info, warn};
use shared::{DateKey, Reminder, ReminderMap, YearCalendar};
use std::rc::Rc;

pub struct ReminderService {
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    storage_key: String,
    calendar: CalendarService,
    scheduler: ReminderScheduler,
    year: i32,
    selected: NaiveDate,
    reminders: ReminderMap,
}

impl ReminderService {
    /// Load the reminder map and arm timers for it.
    ///
    /// The displayed year and the initial selection both come from the clock
    /// at load time.
    pub fn load(
        store: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
        scheduler: Rc<dyn Scheduler>,
        host: Rc<dyn NotificationHost>,
        config: &PlannerConfig,
    ) -> Self {
        let storage_key = config.storage_keys.reminders.clone();
        let mut reminders: ReminderMap = storage::load_or_default(store.as_ref(), &storage_key);

        let before = reminders.len();
        reminders.retain(|_, items| !items.is_empty());
        if reminders.len() != before {
            warn!("Pruned {} empty reminder day(s) from stored data", before - reminders.len());
        }

        let today = clock.today();
        let service = Self {
            store,
            clock,
            storage_key,
            calendar: CalendarService::new(),
            scheduler: ReminderScheduler::new(scheduler, host, config.notification_horizon),
            year: today.year(),
            selected: today,
            reminders,
        };
        service.reschedule();
        service
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn selected_key(&self) -> DateKey {
        DateKey::from_date(self.selected)
    }

    /// Make `date` the day whose reminders are shown and added to
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    /// Reminders of the selected day, in insertion order
    pub fn selected_reminders(&self) -> &[Reminder] {
        self.reminders
            .get(&self.selected_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn reminders(&self) -> &ReminderMap {
        &self.reminders
    }

    /// Year grid with the live "today" and the current selection marked
    pub fn calendar(&self) -> YearCalendar {
        self.calendar
            .generate_year(self.year, self.clock.today(), self.selected, &self.reminders)
    }

    /// Append a reminder to the selected day
    pub fn add_reminder(&mut self, title: &str, time: &str) -> Result<Reminder, ValidationError> {
        let title = validate_text(title).map_err(|e| {
            debug!("Rejected reminder: {}", e);
            e
        })?;

        let id = generate_id(|candidate| {
            self.reminders
                .values()
                .flatten()
                .any(|r| r.id == candidate)
        });
        let reminder = Reminder { id, title, time: normalize_time(time) };

        let key = self.selected_key();
        info!("📌 Adding reminder {} on {}", reminder.id, key);
        self.reminders.entry(key).or_default().push(reminder.clone());
        self.commit();

        Ok(reminder)
    }

    /// Remove a reminder from the selected day. Returns false if it was not there.
    pub fn remove_reminder(&mut self, id: &str) -> bool {
        let key = self.selected_key();
        let Some(items) = self.reminders.get_mut(&key) else {
            return false;
        };

        let before = items.len();
        items.retain(|r| r.id != id);
        if items.len() == before {
            return false;
        }
        if items.is_empty() {
            self.reminders.remove(&key);
        }

        info!("🗑️ Removed reminder {} from {}", id, key);
        self.commit();
        true
    }

    /// Cancel all timers and re-arm them from the current map.
    /// Returns the number of timers armed.
    pub fn reschedule(&self) -> usize {
        self.scheduler.reschedule(&self.reminders, self.clock.now())
    }

    fn commit(&self) {
        if let Err(e) = storage::save(self.store.as_ref(), &self.storage_key, &self.reminders) {
            error!("Failed to persist reminders: {:#}", e);
        }
        self.reschedule();
    }
}
