use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::models::{Account, Session};
    use crate::session::{clear_session, load_session, save_session};

    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum TestRole {
        Member,
        Admin,
    }

    fn session(role: TestRole) -> Session<TestRole> {
        Session {
            token: "tok-123".to_string(),
            user: Account {
                id: 7,
                name: "Asha".to_string(),
                email: "asha@example.edu".to_string(),
                role,
            },
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = MemoryStore::new();
        assert!(load_session::<TestRole, _>(&store).is_none());

        save_session(&store, &session(TestRole::Admin));

        let loaded = load_session::<TestRole, _>(&store).unwrap();
        assert_eq!(loaded.token, "tok-123");
        assert_eq!(loaded.user.email, "asha@example.edu");
        assert_eq!(loaded.role(), TestRole::Admin);
    }

    #[test]
    fn test_clear_destroys_everything() {
        let store = MemoryStore::new();
        save_session(&store, &session(TestRole::Member));
        store.set("unrelated", "value");

        clear_session(&store);

        // Logout wipes the whole storage area, not just the session keys.
        assert!(load_session::<TestRole, _>(&store).is_none());
        assert!(store.get("unrelated").is_none());
    }

    #[test]
    fn test_token_without_user_is_not_authenticated() {
        let store = MemoryStore::new();
        store.set("token", "orphan");
        assert!(load_session::<TestRole, _>(&store).is_none());
    }

    #[test]
    fn test_garbage_user_is_not_authenticated() {
        let store = MemoryStore::new();
        store.set("token", "tok");
        store.set("user", "{not json");
        assert!(load_session::<TestRole, _>(&store).is_none());
    }
}
