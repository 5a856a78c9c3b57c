//! To-do list manager
//!
//! Owns the in-memory list and keeps the store and the view in step with it:
//! every mutation updates memory, repaints incrementally and rewrites the
//! full list before returning.

use super::ids::IdGenerator;
use super::item::{TodoId, TodoItem};
use super::view::TodoView;
use crate::consts::TODOS_KEY;
use crate::persistence;
use crate::platform::storage::KeyValueStore;

/// To-do list manager
pub struct TodoManager<S: KeyValueStore, V: TodoView> {
    store: S,
    view: V,
    /// Storage key holding the list
    key: String,
    items: Vec<TodoItem>,
    ids: IdGenerator,
}

impl<S: KeyValueStore, V: TodoView> TodoManager<S, V> {
    /// Create an empty manager using the default storage key
    pub fn new(store: S, view: V) -> Self {
        Self::with_key(store, view, TODOS_KEY)
    }

    /// Create an empty manager persisting under `key`
    pub fn with_key(store: S, view: V, key: impl Into<String>) -> Self {
        Self {
            store,
            view,
            key: key.into(),
            items: Vec::new(),
            ids: IdGenerator::default(),
        }
    }

    /// Replace the id source (tests use a frozen clock)
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Load the stored list and paint it, without writing anything back.
    ///
    /// Meant to be called once at startup. A corrupt stored value is logged
    /// and treated as an empty list; it stays in the store until the next
    /// mutation overwrites it.
    pub fn restore_all(&mut self) -> &[TodoItem] {
        let items = match persistence::load(&self.store, &self.key) {
            Ok(items) => items,
            Err(e) if e.is_corrupt_storage() => {
                log::warn!("Discarding corrupt stored to-do list: {}", e);
                Vec::new()
            }
            Err(e) => {
                log::error!("Failed to load stored to-do list: {}", e);
                Vec::new()
            }
        };

        for item in &items {
            self.ids.observe(item.id);
            self.view.render_item(item);
        }
        self.items = items;

        log::info!("Restored {} to-dos", self.items.len());
        &self.items
    }

    /// Append a new item, paint it and persist the list
    pub fn add_item(&mut self, text: impl Into<String>) -> TodoItem {
        let items = &self.items;
        let id = self.ids.next_id(|id| items.iter().any(|item| item.id == id));
        let item = TodoItem::new(id, text);
        self.items.push(item.clone());
        self.view.render_item(&item);
        self.persist();

        log::debug!("Added to-do {} ({} total)", item.id, self.items.len());
        item
    }

    /// Remove the item with `id` (no-op on the list if absent), unpaint it
    /// and persist the list
    pub fn remove_item(&mut self, id: TodoId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.view.remove_row(id);
        self.persist();

        if self.items.len() == before {
            log::debug!("No to-do with id {} to remove", id);
        } else {
            log::debug!("Removed to-do {} ({} left)", id, self.items.len());
        }
    }

    fn persist(&mut self) {
        if let Err(e) = persistence::save(&mut self.store, &self.key, &self.items) {
            log::error!("Failed to save to-dos: {}", e);
        }
    }

    /// Items in display order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
