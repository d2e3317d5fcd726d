pub mod use_checklist;
pub mod use_clock_tick;
pub mod use_finance;
pub mod use_notes;
pub mod use_photos;
pub mod use_planner_host;
pub mod use_reminders;
