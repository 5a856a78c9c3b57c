//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Time (wall clock in milliseconds)

pub mod storage;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub use storage::{LocalStorage, open_browser_store};
pub use storage::{KeyValueStore, MemoryStore};
pub use time::now_ms;
