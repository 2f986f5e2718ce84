use std::env;

use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_capacity() -> usize {
    20
}

fn default_path() -> String {
    ".keizai_history.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default = "default_path")]
    pub path: String,
}

impl HistoryConfig {
    pub fn new() -> Self {
        let capacity = env_parse("HISTORY_CAPACITY").unwrap_or_else(default_capacity);
        let path = env::var("HISTORY_PATH").unwrap_or_else(|_| default_path());

        Self { capacity, path }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            path: default_path(),
        }
    }
}
