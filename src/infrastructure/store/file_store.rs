//! Key-value store persisted as one JSON document on disk.
//!
//! The desktop analog of browser storage: a flat map of string keys to
//! string values, rewritten wholesale on every mutation. All IO failures
//! are logged and degrade (reads act empty, writes report `false`) so that
//! callers can treat the backend as unavailable rather than broken.

use crate::domain::KeyValueStore;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

pub struct FileStore {
    // ---
    path: PathBuf,
    // Serializes read-modify-write cycles so concurrent mutations cannot
    // clobber each other's keys.
    io_lock: Mutex<()>,
}

impl FileStore {
    // ---
    pub fn new(path: impl AsRef<std::path::Path>) -> Self {
        // ---
        Self {
            path: path.as_ref().to_path_buf(),
            io_lock: Mutex::new(()),
        }
    }

    /// Loads the backing document. Missing file is an empty store; an
    /// unreadable or malformed file is logged and treated as empty.
    async fn load(&self) -> HashMap<String, String> {
        // ---
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(err) => {
                tracing::warn!("Failed to read store file {:?}: {}", self.path, err);
                return HashMap::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("Store file {:?} is malformed: {}", self.path, err);
                HashMap::new()
            }
        }
    }

    async fn save(&self, entries: &HashMap<String, String>) -> bool {
        // ---
        let json = match serde_json::to_vec_pretty(entries) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!("Failed to serialize store contents: {}", err);
                return false;
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = tokio::fs::create_dir_all(parent).await {
                    tracing::warn!("Failed to create store directory {:?}: {}", parent, err);
                    return false;
                }
            }
        }

        match tokio::fs::write(&self.path, json).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Failed to write store file {:?}: {}", self.path, err);
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    // ---
    async fn get(&self, key: &str) -> Option<String> {
        // ---
        let _guard = self.io_lock.lock().await;
        self.load().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> bool {
        // ---
        let _guard = self.io_lock.lock().await;
        let mut entries = self.load().await;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> bool {
        // ---
        let _guard = self.io_lock.lock().await;
        let mut entries = self.load().await;

        if entries.remove(key).is_none() {
            // Nothing to persist; absence is success.
            return true;
        }

        self.save(&entries).await
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[tokio::test]
    async fn round_trips_across_instances() {
        // ---
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");

        let store = FileStore::new(&path);
        assert!(store.set("session_token", "abc").await);
        assert!(store.set("user_authenticated", "true").await);

        // A fresh instance over the same file sees the same data.
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("session_token").await.as_deref(), Some("abc"));

        assert!(reopened.remove("session_token").await);
        assert!(reopened.get("session_token").await.is_none());
        assert_eq!(
            reopened.get("user_authenticated").await.as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        // ---
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("never-written.json"));
        assert!(store.get("anything").await.is_none());
        assert!(store.remove("anything").await);
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_empty() {
        // ---
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        std::fs::write(&path, b"{ not json").expect("write corrupt file");

        let store = FileStore::new(&path);
        assert!(store.get("k").await.is_none());

        // A write replaces the corrupt document with a valid one.
        assert!(store.set("k", "v").await);
        assert_eq!(store.get("k").await.as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn unwritable_path_reports_failure() {
        // ---
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"plain file").expect("write blocker");

        // Parent "directory" is a regular file, so every write must fail.
        let store = FileStore::new(blocker.join("store.json"));
        assert!(!store.set("k", "v").await);
        assert!(store.get("k").await.is_none());
    }
}
