//! Dashboard configuration
//!
//! Storage keys and DOM selectors, optionally overridden by a JSON block
//! embedded in the page (`<script type="application/json" id="dash-config">`).

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{DashError, Result};

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    // === Storage ===
    /// Key holding the to-do list
    pub todos_key: String,
    /// Key holding the remembered username
    pub username_key: String,

    // === To-do list ===
    /// Form with the single text input for new items
    pub todo_form: String,
    /// Container receiving one row per item
    pub todo_list: String,
    /// Text on each row's delete control
    pub delete_label: String,

    // === Greeting ===
    pub login_form: String,
    pub greeting: String,

    // === Quote / background ===
    pub quote_text: String,
    pub quote_author: String,
    pub container: String,

    /// Class used to hide sections
    pub hidden_class: String,
    /// Console log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            todos_key: TODOS_KEY.to_string(),
            username_key: USERNAME_KEY.to_string(),

            todo_form: "#todo-form".to_string(),
            todo_list: "#todo-list".to_string(),
            delete_label: DELETE_LABEL.to_string(),

            login_form: ".login-form".to_string(),
            greeting: ".greeting".to_string(),

            quote_text: "#quote span:first-child".to_string(),
            quote_author: "#quote span:last-child".to_string(),
            container: ".container".to_string(),

            hidden_class: HIDDEN_CLASSNAME.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DashConfig {
    /// Parse a config block; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(DashError::Config)
    }

    /// Parsed log level (falls back to Info)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = DashConfig::from_json(r#"{"todos_key":"my_todos","log_level":"debug"}"#)
            .unwrap();
        assert_eq!(config.todos_key, "my_todos");
        assert_eq!(config.username_key, USERNAME_KEY);
        assert_eq!(config.todo_list, "#todo-list");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_bad_level_falls_back() {
        let config = DashConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_malformed_config() {
        let err = DashConfig::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, DashError::Config(_)));
    }
}
