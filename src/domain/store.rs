use std::sync::Arc;

/// Abstraction for string key-value persistence (the browser-storage analog).
///
/// Implementations must tolerate the backend being unavailable or failing:
/// reads report absence, writes report success, and failures are logged by
/// the implementation rather than raised to the caller.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    // ---
    /// Read a value. `None` when the key is absent or the backend failed.
    async fn get(&self, key: &str) -> Option<String>;

    /// Write a value. `false` when the backend failed.
    async fn set(&self, key: &str, value: &str) -> bool;

    /// Remove a value. `false` when the backend failed. Removing an absent
    /// key is not a failure.
    async fn remove(&self, key: &str) -> bool;
}

/// Type alias for any backend that implements KeyValueStore.
pub type StorePtr = Arc<dyn KeyValueStore>;
