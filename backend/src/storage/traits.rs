//! # Storage Traits
//!
//! The domain layer only ever sees this trait, so the same services run
//! against browser storage in the app and an in-memory map in tests.

use anyhow::Result;

/// Interface of the host's key-value persistence
///
/// Values are whole JSON documents. Writes are assumed to either fully
/// succeed or fail; there is no partial write to recover from.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
