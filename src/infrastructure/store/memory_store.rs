use crate::domain::KeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory key-value store. Never fails.
pub struct MemoryStore {
    // ---
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    // ---
    pub fn new() -> Self {
        // ---
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    // ---
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    // ---
    async fn get(&self, key: &str) -> Option<String> {
        // ---
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    async fn set(&self, key: &str, value: &str) -> bool {
        // ---
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        true
    }

    async fn remove(&self, key: &str) -> bool {
        // ---
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        true
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        // ---
        let store = MemoryStore::new();

        assert!(store.get("k").await.is_none());
        assert!(store.set("k", "v").await);
        assert_eq!(store.get("k").await.as_deref(), Some("v"));
        assert!(store.remove("k").await);
        assert!(store.get("k").await.is_none());

        // Removing an absent key is not a failure.
        assert!(store.remove("k").await);
    }
}
