//! Small DOM helpers shared by the widgets

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

/// The page document
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// First element matching `selector`
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// First `<input>` inside `parent`
pub fn input_in(parent: &Element) -> Option<HtmlInputElement> {
    parent
        .query_selector("input")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()
}

/// First `<button>` inside `parent`
pub fn button_in(parent: &Element) -> Option<Element> {
    parent.query_selector("button").ok().flatten()
}

/// Add or remove the hidden class
pub fn set_hidden(el: &Element, hidden_class: &str, hidden: bool) {
    let classes = el.class_list();
    let result = if hidden {
        classes.add_1(hidden_class)
    } else {
        classes.remove_1(hidden_class)
    };
    if let Err(e) = result {
        log::warn!("Failed to toggle '{}': {:?}", hidden_class, e);
    }
}
