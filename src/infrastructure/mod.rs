pub mod metrics;
mod store;

// Re-export the factory functions for easy access
pub use metrics::{create_noop_metrics, create_recorder_metrics};
pub use store::{create_file_store, create_memory_store, FileStore, MemoryStore};
