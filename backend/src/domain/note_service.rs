//! Notes: a most-recent-first list of free-text notes.

use super::generate_id;
use super::validation::{validate_text, ValidationError};
use crate::clock::Clock;
use crate::config::PlannerConfig;
use crate::storage::{self, KeyValueStore};
use log::{debug, error, info};
use shared::Note;
use std::rc::Rc;

pub struct NoteService {
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    storage_key: String,
    notes: Vec<Note>,
}

impl NoteService {
    pub fn load(store: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>, config: &PlannerConfig) -> Self {
        let storage_key = config.storage_keys.notes.clone();
        let notes = storage::load_or_default(store.as_ref(), &storage_key);
        Self { store, clock, storage_key, notes }
    }

    /// Notes, newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn add_note(&mut self, text: &str) -> Result<Note, ValidationError> {
        let text = validate_text(text).map_err(|e| {
            debug!("Rejected note: {}", e);
            e
        })?;

        let note = Note {
            id: generate_id(|candidate| self.notes.iter().any(|n| n.id == candidate)),
            text,
            created_at: self.clock.now_millis(),
        };
        info!("📝 Adding note {}", note.id);
        self.notes.insert(0, note.clone());
        self.persist();

        Ok(note)
    }

    /// Returns false if no note has this id
    pub fn remove_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return false;
        }
        info!("🗑️ Removed note {}", id);
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(e) = storage::save(self.store.as_ref(), &self.storage_key, &self.notes) {
            error!("Failed to persist notes: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use crate::test_utils::TestEnvironment;
    use chrono::Duration;

    fn service(env: &TestEnvironment) -> NoteService {
        NoteService::load(env.store.clone(), env.clock.clone(), &env.config)
    }

    fn stored(env: &TestEnvironment) -> Vec<Note> {
        storage::load_or_default(env.store.as_ref(), "notes")
    }

    #[test]
    fn test_add_note_prepends_and_persists() {
        let env = TestEnvironment::new();
        let mut notes = service(&env);

        let first = notes.add_note("first").unwrap();
        env.clock.advance(Duration::seconds(5));
        let second = notes.add_note("second").unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.created_at - first.created_at, 5_000);

        let stored = stored(&env);
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].text, "second");
        assert_eq!(stored[1].text, "first");
    }

    #[test]
    fn test_blank_note_is_rejected() {
        let env = TestEnvironment::new();
        let mut notes = service(&env);

        assert_eq!(notes.add_note("   "), Err(ValidationError::EmptyText));
        assert!(notes.notes().is_empty());
        assert_eq!(env.store.raw("notes"), None);
    }

    #[test]
    fn test_note_text_is_trimmed() {
        let env = TestEnvironment::new();
        let mut notes = service(&env);
        assert_eq!(notes.add_note("  groceries\n").unwrap().text, "groceries");
    }

    #[test]
    fn test_each_add_grows_by_one_with_unique_ids() {
        let env = TestEnvironment::new();
        let mut notes = service(&env);

        for i in 0..20 {
            notes.add_note(&format!("note {}", i)).unwrap();
            let stored = stored(&env);
            assert_eq!(stored.len(), i + 1);
            let mut ids: Vec<&str> = stored.iter().map(|n| n.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), i + 1);
        }
    }

    #[test]
    fn test_remove_note() {
        let env = TestEnvironment::new();
        let mut notes = service(&env);
        let keep = notes.add_note("keep").unwrap();
        let dropped = notes.add_note("drop").unwrap();

        assert!(notes.remove_note(&dropped.id));
        assert!(!notes.remove_note(&dropped.id));

        let stored = stored(&env);
        assert_eq!(stored, vec![keep]);
    }

    #[test]
    fn test_reload_round_trip() {
        let env = TestEnvironment::new();
        let mut notes = service(&env);
        notes.add_note("a").unwrap();
        notes.add_note("b").unwrap();

        let reloaded = service(&env);
        assert_eq!(reloaded.notes(), notes.notes());
    }

    #[test]
    fn test_corrupt_blob_starts_empty() {
        let env = TestEnvironment::with_store(InMemoryStore::new().with_entry("notes", "{{{"));
        let mut notes = service(&env);
        assert!(notes.notes().is_empty());

        notes.add_note("fresh start").unwrap();
        assert_eq!(stored(&env).len(), 1);
    }
}
