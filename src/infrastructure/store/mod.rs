mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::domain::StorePtr;
use std::path::Path;
use std::sync::Arc;

/// Creates a new in-memory key-value store.
///
/// Contents live for the process lifetime only. Useful for tests and for
/// running the gate without a persisted session.
pub fn create_memory_store() -> StorePtr {
    // ---
    Arc::new(MemoryStore::new())
}

/// Creates a key-value store persisted as a single JSON document at `path`.
///
/// The file is created lazily on first write; a missing or unreadable file
/// degrades to an empty store rather than failing.
pub fn create_file_store(path: impl AsRef<Path>) -> StorePtr {
    // ---
    Arc::new(FileStore::new(path))
}
