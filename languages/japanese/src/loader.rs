use std::path::Path;

use keizai_config::dictionary::DictionaryConfig;
use keizai_core::dictionary::{Corpus, LoadError};
use keizai_types::DictionaryEntry;
use serde_json::Value;

pub struct CorpusLoader;

impl CorpusLoader {
    /// Parse a corpus from JSON: either a bare array of entries or the
    /// search endpoint's `{ "data": [...] }` envelope.
    pub fn from_json(name: &str, json: &str) -> Result<Corpus, LoadError> {
        let value: Value = serde_json::from_str(json)?;

        let items = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(LoadError::InvalidFormat(
                        "expected an array or an object with a \"data\" array".to_string(),
                    ));
                }
            },
            _ => {
                return Err(LoadError::InvalidFormat(
                    "expected an array of dictionary entries".to_string(),
                ));
            }
        };

        let entries: Vec<DictionaryEntry> = serde_json::from_value(Value::Array(items))?;
        Ok(Corpus::new(name, entries))
    }

    /// Load corpus from file path
    pub fn load_from_file(path: &Path) -> Result<Corpus, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading corpus from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("corpus");
        let corpus = Self::from_json(name, &json)?;
        tracing::info!("Loaded {} dictionary entries from file", corpus.len());
        Ok(corpus)
    }

    /// Load the main corpus and merge every additional one on top.
    ///
    /// A broken additional corpus is skipped with a warning; a broken main
    /// corpus is an error.
    pub fn load_configured(config: &DictionaryConfig) -> Result<Corpus, LoadError> {
        let mut corpus = Self::load_from_file(Path::new(&config.corpus_path))?;

        for path in &config.additional_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional corpus from: {}", path);
                    corpus = corpus.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load corpus from {}: {}", path, e);
                }
            }
        }

        Ok(corpus)
    }
}
