//! Domain services. Each one owns exactly one persisted collection and
//! nothing else; they never reference one another.

pub mod calendar;
pub mod checklist_service;
pub mod finance_service;
pub mod note_service;
pub mod photo_service;
pub mod reminder_service;
pub mod validation;

pub use calendar::CalendarService;
pub use checklist_service::ChecklistService;
pub use finance_service::{summarize, FinanceService};
pub use note_service::NoteService;
pub use photo_service::PhotoService;
pub use reminder_service::ReminderService;
pub use validation::ValidationError;

use uuid::Uuid;

/// Fresh v4 id that `is_taken` does not already know about
pub(crate) fn generate_id(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !is_taken(&id) {
            return id;
        }
    }
}
