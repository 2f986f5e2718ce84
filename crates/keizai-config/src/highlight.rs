use std::env;

use serde::{Deserialize, Serialize};

fn default_open() -> String {
    "<mark>".to_string()
}

fn default_close() -> String {
    "</mark>".to_string()
}

/// Markers wrapped around a highlighted span
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    #[serde(default = "default_open")]
    pub open: String,
    #[serde(default = "default_close")]
    pub close: String,
}

impl HighlightConfig {
    pub fn new() -> Self {
        let open = env::var("HIGHLIGHT_OPEN").unwrap_or_else(|_| default_open());
        let close = env::var("HIGHLIGHT_CLOSE").unwrap_or_else(|_| default_close());

        Self { open, close }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
        }
    }
}
