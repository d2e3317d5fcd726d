//! JSON (de)serialization of whole collections.
//!
//! Loading never fails: a missing key, an unreadable store or a malformed
//! blob all come back as an empty collection. The user is never told; the
//! recovery is only logged.

use super::traits::KeyValueStore;
use anyhow::{Context, Result};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Load the collection stored under `key`, or its default when unusable
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding malformed '{}' data: {}", key, e);
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            warn!("Failed to read '{}' from storage: {}", key, e);
            T::default()
        }
    }
}

/// Serialize `value` and write it under `key`
pub fn save<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize '{}'", key))?;
    store
        .set(key, &raw)
        .with_context(|| format!("Failed to write '{}' to storage", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use anyhow::anyhow;
    use shared::Note;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("storage disabled"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("quota exceeded"))
        }
    }

    #[test]
    fn test_missing_key_loads_default() {
        let store = InMemoryStore::new();
        let notes: Vec<Note> = load_or_default(&store, "notes");
        assert!(notes.is_empty());
    }

    #[test]
    fn test_malformed_json_loads_default() {
        for raw in ["{not json", "null", "{\"a\":1}", "[{\"id\":1}]"] {
            let store = InMemoryStore::new().with_entry("notes", raw);
            let notes: Vec<Note> = load_or_default(&store, "notes");
            assert!(notes.is_empty(), "expected empty collection for {:?}", raw);
        }
    }

    #[test]
    fn test_read_error_loads_default() {
        let notes: Vec<Note> = load_or_default(&BrokenStore, "notes");
        assert!(notes.is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let store = InMemoryStore::new();
        let notes = vec![
            Note { id: "b".to_string(), text: "second".to_string(), created_at: 2 },
            Note { id: "a".to_string(), text: "first".to_string(), created_at: 1 },
        ];
        save(&store, "notes", &notes).unwrap();

        let loaded: Vec<Note> = load_or_default(&store, "notes");
        assert_eq!(loaded, notes);
    }

    #[test]
    fn test_save_reports_write_failure() {
        let err = save(&BrokenStore, "notes", &Vec::<Note>::new()).unwrap_err();
        assert!(err.to_string().contains("notes"));
    }
}
