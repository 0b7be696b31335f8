pub mod noop;
pub mod recorder;

// Re-export the factory functions for easy access
pub use noop::create as create_noop_metrics;
pub use recorder::create as create_recorder_metrics;
