//! Durable preference storage.
//!
//! Simple get/set string storage. The store holds a durable copy of the theme
//! preference, not a second source of truth: the controller reads it once to
//! seed initial state and only writes afterwards.

use std::cell::RefCell;
use std::collections::HashMap;

pub trait PersistenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store, useful for tests and for hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PersistenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("preferredTheme"), None);

        store.set("preferredTheme", "dark");
        assert_eq!(store.get("preferredTheme").as_deref(), Some("dark"));

        store.set("preferredTheme", "light");
        assert_eq!(store.get("preferredTheme").as_deref(), Some("light"));
    }

    #[test]
    fn with_entry_seeds_the_store() {
        let store = MemoryStore::with_entry("preferredTheme", "cyber");
        assert_eq!(store.get("preferredTheme").as_deref(), Some("cyber"));
    }
}
