use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::highlight::HighlightConfig;
use self::history::HistoryConfig;
use self::search::SearchConfig;

pub mod dictionary;
pub mod highlight;
pub mod history;
pub mod search;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub highlight: HighlightConfig,
    pub dictionary: DictionaryConfig,
    pub history: HistoryConfig,
}

impl Config {
    /// Build configuration from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            search: SearchConfig::new(),
            highlight: HighlightConfig::new(),
            dictionary: DictionaryConfig::new(),
            history: HistoryConfig::new(),
        }
    }
}

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
