//! # Planner Backend
//!
//! In-process domain layer for the pastel planner. Everything here is
//! synchronous and storage-agnostic:
//! - Host capabilities (key-value storage, clock, timers, notifications)
//!   come in through the traits in [`storage`], [`clock`] and [`notifications`]
//! - Each collection is owned by exactly one service in [`domain`]
//! - Nothing here touches browser APIs, so the whole crate runs under `cargo test`

pub mod clock;
pub mod config;
pub mod domain;
pub mod notifications;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{PlannerConfig, StorageKeys};
pub use domain::{
    CalendarService, ChecklistService, FinanceService, NoteService, PhotoService, ReminderService,
    ValidationError,
};
pub use notifications::{NotificationHost, Scheduler};
pub use storage::{InMemoryStore, KeyValueStore};
