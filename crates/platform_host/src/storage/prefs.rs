//! Key/value preference storage contracts and adapters.
//!
//! Desktop layout persistence is synchronous and unbatched: every state change re-serializes
//! the whole document and writes it under one key. The contract therefore mirrors the browser's
//! `localStorage` surface instead of an async store.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for raw JSON values stored as text per key.
pub trait PrefsStore {
    /// Loads the raw string stored under `key`.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Replaces the raw string stored under `key`.
    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String>;

    /// Deletes `key`. Deleting a missing key succeeds.
    fn delete_pref(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a test can hand one clone to the runtime and inspect
/// the other.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::default();
        store.inner.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        store
    }

    /// Returns whether `key` currently holds a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref("pref.key", "{\"k\":1}").expect("save");
        assert_eq!(
            store_obj.load_pref("pref.key").expect("load"),
            Some("{\"k\":1}".to_string())
        );
        store_obj.delete_pref("pref.key").expect("delete");
        assert_eq!(store_obj.load_pref("pref.key").expect("load"), None);
        store_obj
            .delete_pref("pref.key")
            .expect("deleting a missing key succeeds");
    }

    #[test]
    fn memory_prefs_store_clones_share_entries() {
        let store = MemoryPrefsStore::with_entries([("seed", "1")]);
        let other = store.clone();

        other.save_pref("written", "2").expect("save");

        assert!(store.contains_key("seed"));
        assert!(store.contains_key("written"));
    }
}
