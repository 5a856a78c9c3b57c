//! Daily Dash - A personal browser dashboard
//!
//! Core modules:
//! - `todo`: To-do list manager, id generation and the view abstraction
//! - `persistence`: Encode/decode of the stored to-do list
//! - `platform`: Browser/native storage and clock
//! - `ui`: Greeting, quote, background and the DOM to-do list
//! - `config`: Storage keys, selectors and log level

pub mod config;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod todo;
pub mod ui;

pub use config::DashConfig;
pub use error::{DashError, Result};
pub use platform::storage::{KeyValueStore, MemoryStore};
pub use todo::{IdGenerator, MemoryView, TodoId, TodoItem, TodoManager, TodoView};

/// Dashboard constants
pub mod consts {
    /// Storage key holding the serialized to-do list
    pub const TODOS_KEY: &str = "todos";
    /// Storage key holding the remembered username
    pub const USERNAME_KEY: &str = "username";
    /// Class toggled to show/hide page sections
    pub const HIDDEN_CLASSNAME: &str = "hidden";
    /// Label on each row's delete control
    pub const DELETE_LABEL: &str = "❌";
}
