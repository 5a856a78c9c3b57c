//! Greeting banner
//!
//! Asks for a name once, remembers it, and greets the user on later visits.
//! The to-do form stays hidden until a name is known.

use crate::platform::storage::KeyValueStore;

/// Banner text for `name`
pub fn greeting_text(name: &str) -> String {
    format!("Hello {}", name)
}

/// The login button is only shown once something has been typed
pub fn submit_visible(input: &str) -> bool {
    !input.is_empty()
}

/// Previously remembered username
pub fn saved_username<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    store.get(key)
}

/// Remember `name` for later visits
pub fn remember_username<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, name: &str) {
    store.set(key, name);
    log::info!("Username saved");
}

/// Show the greeting if a name is stored, otherwise wire up the login form
#[cfg(target_arch = "wasm32")]
pub fn mount(
    document: &web_sys::Document,
    config: &crate::DashConfig,
    store: Box<dyn KeyValueStore>,
) {
    use wasm_bindgen::prelude::*;

    use super::dom;

    if let Some(name) = saved_username(&*store, &config.username_key) {
        paint(document, config, &name);
        return;
    }

    let Some(form) = dom::query(document, &config.login_form) else {
        log::warn!("Login form '{}' not found", config.login_form);
        return;
    };
    let (Some(input), Some(button)) = (dom::input_in(&form), dom::button_in(&form)) else {
        log::warn!("Login form is missing its input or button");
        return;
    };

    dom::set_hidden(&button, &config.hidden_class, !submit_visible(&input.value()));

    // Show the login button only while the input has text
    {
        let input_clone = input.clone();
        let hidden_class = config.hidden_class.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            dom::set_hidden(&button, &hidden_class, !submit_visible(&input_clone.value()));
        });
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Submit: hide the form, remember the name, greet
    {
        let mut store = store;
        let form_clone = form.clone();
        let document = document.clone();
        let config = config.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            dom::set_hidden(&form_clone, &config.hidden_class, true);
            let name = input.value();
            remember_username(&mut *store, &config.username_key, &name);
            paint(&document, &config, &name);
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    dom::set_hidden(&form, &config.hidden_class, false);
}

/// Paint the greeting and reveal the to-do form
#[cfg(target_arch = "wasm32")]
fn paint(document: &web_sys::Document, config: &crate::DashConfig, name: &str) {
    use super::dom;

    if let Some(greeting) = dom::query(document, &config.greeting) {
        greeting.set_text_content(Some(&greeting_text(name)));
        dom::set_hidden(&greeting, &config.hidden_class, false);
    }
    if let Some(todo_form) = dom::query(document, &config.todo_form) {
        dom::set_hidden(&todo_form, &config.hidden_class, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::USERNAME_KEY;
    use crate::platform::storage::MemoryStore;

    #[test]
    fn test_greeting_text() {
        assert_eq!(greeting_text("Ada"), "Hello Ada");
    }

    #[test]
    fn test_submit_visible() {
        assert!(!submit_visible(""));
        assert!(submit_visible("a"));
        // Whitespace counts as input
        assert!(submit_visible(" "));
    }

    #[test]
    fn test_remember_then_recall() {
        let mut store = MemoryStore::new();
        assert_eq!(saved_username(&store, USERNAME_KEY), None);

        remember_username(&mut store, USERNAME_KEY, "Ada");
        assert_eq!(saved_username(&store, USERNAME_KEY).as_deref(), Some("Ada"));
    }
}
