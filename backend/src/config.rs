//! Planner configuration.
//!
//! There is no configuration file; the defaults below are what the browser
//! build uses. Tests construct their own values to isolate storage keys.

use chrono::Duration;

/// Reminders due further out than this are never armed
pub const DEFAULT_NOTIFICATION_HORIZON_DAYS: i64 = 30;

/// Storage key of each persisted collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub notes: String,
    pub finance: String,
    pub photos: String,
    pub todos: String,
    pub reminders: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            notes: "notes".to_string(),
            finance: "finance".to_string(),
            photos: "photos".to_string(),
            todos: "todos".to_string(),
            reminders: "reminders".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub storage_keys: StorageKeys,
    pub notification_horizon: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            storage_keys: StorageKeys::default(),
            notification_horizon: Duration::days(DEFAULT_NOTIFICATION_HORIZON_DAYS),
        }
    }
}
