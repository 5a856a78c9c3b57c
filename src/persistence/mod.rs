//! Save/load of the to-do list
//!
//! Features:
//! - Wire record separate from the in-memory item
//! - Corruption and duplicate-id detection on load
//! - Absent key loads as an empty list

pub mod codec;

pub use codec::{StoredTodo, decode, encode, load, save};
