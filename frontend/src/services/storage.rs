//! `localStorage`-backed implementation of the planner's key-value store.

use anyhow::{anyhow, Result};
use planner_backend::{InMemoryStore, KeyValueStore};
use std::rc::Rc;
use web_sys::Storage;

pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// `None` when the browser denies access (e.g. storage disabled by policy)
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                log::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| anyhow!("getItem('{}') failed: {:?}", key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| anyhow!("setItem('{}') failed: {:?}", key, e))
    }
}

/// `localStorage` if available, otherwise a store that lasts for this page only
pub fn browser_store() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("Falling back to in-memory storage; changes will not survive a reload");
            Rc::new(InMemoryStore::new())
        }
    }
}
