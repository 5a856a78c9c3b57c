//! Page widgets
//!
//! Each widget keeps its decision logic pure (testable natively) and exposes
//! a `mount` that binds it to the DOM in the browser build.

pub mod background;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod greeting;
pub mod quote;
#[cfg(target_arch = "wasm32")]
pub mod todo_list;

pub use background::Gradient;
pub use quote::Quote;
