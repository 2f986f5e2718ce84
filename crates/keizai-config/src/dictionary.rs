use std::env;

use serde::{Deserialize, Serialize};

fn default_corpus_path() -> String {
    "data/entries.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Main corpus file (JSON array or `{ "data": [...] }`)
    #[serde(default = "default_corpus_path")]
    pub corpus_path: String,
    /// Extra corpora merged on top; later files override earlier entries
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let corpus_path = env::var("CORPUS_PATH").unwrap_or_else(|_| default_corpus_path());

        Self {
            corpus_path,
            additional_paths: vec![],
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            additional_paths: vec![],
        }
    }
}
