//! View abstraction for the to-do list
//!
//! A view is append-only plus removal by id, so its rows always appear in
//! list order.

use super::item::{TodoId, TodoItem};

/// Projection of the to-do list onto a visible surface
pub trait TodoView {
    /// Handle to a painted row
    type Row;

    /// Append a row showing `item` with a delete control
    fn render_item(&mut self, item: &TodoItem) -> Self::Row;

    /// Remove the row for `id` (no-op if absent)
    fn remove_row(&mut self, id: TodoId);
}

/// A painted row in a [`MemoryView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: TodoId,
    pub text: String,
}

/// View that records rows in memory (native runs and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    rows: Vec<RenderedRow>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently shown, top to bottom
    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    /// Row texts, top to bottom
    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.text.as_str()).collect()
    }
}

impl TodoView for MemoryView {
    type Row = TodoId;

    fn render_item(&mut self, item: &TodoItem) -> TodoId {
        self.rows.push(RenderedRow {
            id: item.id,
            text: item.text.clone(),
        });
        item.id
    }

    fn remove_row(&mut self, id: TodoId) {
        self.rows.retain(|r| r.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_remove() {
        let mut view = MemoryView::new();
        let a = view.render_item(&TodoItem::new(TodoId::new(1), "a"));
        view.render_item(&TodoItem::new(TodoId::new(2), "b"));
        assert_eq!(view.texts(), vec!["a", "b"]);

        view.remove_row(a);
        assert_eq!(view.texts(), vec!["b"]);

        // Unknown id
        view.remove_row(TodoId::new(99));
        assert_eq!(view.rows().len(), 1);
    }
}
