//! DOM binding for the to-do list
//!
//! Rows look like `<li data-todo-id="…"><span>text</span><button>❌</button></li>`
//! and are appended to the list container in item order.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::dom;
use crate::DashConfig;
use crate::platform::storage::KeyValueStore;
use crate::todo::{TodoId, TodoItem, TodoManager, TodoView};

/// Called with the row's id when its delete control is clicked
pub type DeleteHandler = Rc<dyn Fn(TodoId)>;

/// Manager as bound to the page
pub type DomTodoManager = TodoManager<Box<dyn KeyValueStore>, DomTodoList>;

/// To-do list rendered into a DOM container
pub struct DomTodoList {
    document: Document,
    list: Element,
    delete_label: String,
    on_delete: Option<DeleteHandler>,
}

impl DomTodoList {
    pub fn new(document: Document, list: Element, delete_label: impl Into<String>) -> Self {
        Self {
            document,
            list,
            delete_label: delete_label.into(),
            on_delete: None,
        }
    }

    /// Must be set before any row is rendered; rows capture the handler
    /// present when they were created.
    pub fn set_on_delete(&mut self, handler: DeleteHandler) {
        self.on_delete = Some(handler);
    }

    fn row_selector(id: TodoId) -> String {
        format!("li[data-todo-id=\"{}\"]", id)
    }

    fn build_row(&self, item: &TodoItem) -> Result<Element, JsValue> {
        let li = self.document.create_element("li")?;
        li.set_attribute("data-todo-id", &item.id.to_string())?;

        let span = self.document.create_element("span")?;
        span.set_text_content(Some(&item.text));

        let button = self.document.create_element("button")?;
        button.set_text_content(Some(&self.delete_label));

        let id = item.id;
        let on_delete = self.on_delete.clone();
        let row = li.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            // The manager unpaints the row itself; without one, drop it here
            match on_delete {
                Some(ref handler) => handler(id),
                None => row.remove(),
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        li.append_child(&span)?;
        li.append_child(&button)?;
        Ok(li)
    }
}

impl TodoView for DomTodoList {
    type Row = Option<Element>;

    fn render_item(&mut self, item: &TodoItem) -> Option<Element> {
        let row = match self.build_row(item) {
            Ok(row) => row,
            Err(e) => {
                log::error!("Failed to build row for to-do {}: {:?}", item.id, e);
                return None;
            }
        };
        if let Err(e) = self.list.append_child(&row) {
            log::error!("Failed to append row for to-do {}: {:?}", item.id, e);
            return None;
        }
        Some(row)
    }

    fn remove_row(&mut self, id: TodoId) {
        if let Ok(Some(row)) = self.list.query_selector(&Self::row_selector(id)) {
            row.remove();
        }
    }
}

/// Bind the to-do form and list, restore saved items, and return the manager
pub fn mount(
    document: &Document,
    config: &DashConfig,
    store: Box<dyn KeyValueStore>,
) -> Option<Rc<RefCell<DomTodoManager>>> {
    let Some(form) = dom::query(document, &config.todo_form) else {
        log::warn!("To-do form '{}' not found", config.todo_form);
        return None;
    };
    let Some(input) = dom::input_in(&form) else {
        log::warn!("To-do form has no input");
        return None;
    };
    let Some(list) = dom::query(document, &config.todo_list) else {
        log::warn!("To-do list '{}' not found", config.todo_list);
        return None;
    };

    let view = DomTodoList::new(document.clone(), list, config.delete_label.as_str());
    let manager = Rc::new(RefCell::new(TodoManager::with_key(
        store,
        view,
        config.todos_key.clone(),
    )));

    // Delete buttons reach the manager weakly so rows don't keep it alive
    {
        let weak = Rc::downgrade(&manager);
        manager
            .borrow_mut()
            .view_mut()
            .set_on_delete(Rc::new(move |id: TodoId| {
                if let Some(manager) = weak.upgrade() {
                    manager.borrow_mut().remove_item(id);
                }
            }));
    }

    manager.borrow_mut().restore_all();

    // Submit: take the text, clear the input, add
    {
        let manager = manager.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let text = input.value();
            input.set_value("");
            manager.borrow_mut().add_item(text);
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    Some(manager)
}
