//! Tab-scoped session storage abstraction.

use parking_lot::Mutex;
use std::collections::HashMap;

/// Well-known session keys shared between the bus and its consumers.
pub mod keys {
    /// Presence of this key is the sole login indicator.
    pub const USER_EMAIL: &str = "userEmail";

    /// Role fallback used when the cached profile carries none.
    pub const USER_ROLE: &str = "userRole";

    /// Serialized cached profile snapshot.
    pub const USER_PROFILE: &str = "userProfile";
}

/// Narrow accessor contract over the tab-scoped key/value store, so storage
/// backends can be swapped behind the same interface.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// In-memory store used outside a browser context and in tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(keys::USER_EMAIL), None);

        store.set(keys::USER_EMAIL, "builder@example.com");
        assert_eq!(store.get(keys::USER_EMAIL).as_deref(), Some("builder@example.com"));

        store.remove(keys::USER_EMAIL);
        assert_eq!(store.get(keys::USER_EMAIL), None);
    }

    #[test]
    fn clear_drops_everything() {
        let store = MemoryStore::new();
        store.set(keys::USER_EMAIL, "a@b.c");
        store.set(keys::USER_ROLE, "user");
        store.clear();
        assert_eq!(store.get(keys::USER_EMAIL), None);
        assert_eq!(store.get(keys::USER_ROLE), None);
    }
}
