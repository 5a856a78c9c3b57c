//! Daily Dash entry point
//!
//! Handles platform-specific initialization and mounts the page widgets.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_dash {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use web_sys::Document;

    use daily_dash::platform::{now_ms, open_browser_store};
    use daily_dash::ui::{background, dom, greeting, quote, todo_list};
    use daily_dash::{DashConfig, DashError};

    /// Config from `<script type="application/json" id="dash-config">`, if any
    fn read_config(document: &Document) -> Result<DashConfig, DashError> {
        match document
            .get_element_by_id("dash-config")
            .and_then(|el| el.text_content())
        {
            Some(json) => DashConfig::from_json(&json),
            None => Ok(DashConfig::default()),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();

        let document = dom::document().expect("no document");
        let config = read_config(&document);
        let level = config
            .as_ref()
            .map(DashConfig::log_level)
            .unwrap_or(log::Level::Info);
        console_log::init_with_level(level).expect("Failed to init logger");

        let config = config.unwrap_or_else(|e| {
            log::warn!("{}, using defaults", e);
            DashConfig::default()
        });

        log::info!("Daily Dash starting...");

        let seed = now_ms();
        let mut rng = Pcg32::seed_from_u64(seed);
        log::debug!("Widgets seeded with: {}", seed);

        background::mount(&document, &config, &mut rng);
        quote::mount(&document, &config, &mut rng);
        greeting::mount(&document, &config, open_browser_store());

        match todo_list::mount(&document, &config, open_browser_store()) {
            Some(todos) => log::info!("To-do list ready ({} items)", todos.borrow().len()),
            None => log::warn!("To-do list not mounted"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_dash::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Daily Dash (native) starting...");
    log::info!("Native mode has no DOM - run with `trunk serve` for the web version");

    demo_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run the dashboard against in-memory storage and print what the page would show
#[cfg(not(target_arch = "wasm32"))]
fn demo_session() {
    use daily_dash::consts::TODOS_KEY;
    use daily_dash::platform::now_ms;
    use daily_dash::ui::{Gradient, greeting, quote};
    use daily_dash::{KeyValueStore, MemoryStore, MemoryView, TodoManager};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    let mut rng = Pcg32::seed_from_u64(now_ms());
    let todays = quote::pick(&mut rng);
    println!("{}", greeting::greeting_text("there"));
    println!("\"{}\" - {}", todays.quote, todays.author);
    println!("background: {}", Gradient::random(&mut rng).css());

    let mut todos = TodoManager::new(MemoryStore::new(), MemoryView::new());
    todos.restore_all();
    let milk = todos.add_item("buy milk");
    todos.add_item("walk dog");
    todos.add_item("call mom");
    todos.remove_item(milk.id);

    println!("\nTo-do:");
    for row in todos.view().rows() {
        println!("  [{}] {}", row.id, row.text);
    }
    println!(
        "\nstored {}: {}",
        TODOS_KEY,
        todos.store().get(TODOS_KEY).unwrap_or_default()
    );
}
