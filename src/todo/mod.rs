//! To-do list core
//!
//! The manager owns the list and is the only path to the store; views only
//! mirror what the manager tells them.

pub mod ids;
pub mod item;
pub mod manager;
pub mod view;

pub use ids::{IdGenerator, MAX_ID};
pub use item::{TodoId, TodoItem};
pub use manager::TodoManager;
pub use view::{MemoryView, TodoView};
