//! # Storage Module
//!
//! Every collection is persisted as one JSON blob under a fixed key in a
//! string-to-string store supplied by the host. The browser build backs
//! [`KeyValueStore`] with `localStorage`; tests use [`InMemoryStore`].

pub mod json;
pub mod memory;
pub mod traits;

pub use json::{load_or_default, save};
pub use memory::InMemoryStore;
pub use traits::KeyValueStore;
