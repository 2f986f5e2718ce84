use std::collections::{HashMap, HashSet};

use keizai_types::DictionaryEntry;

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Every entry, in corpus order
    fn entries(&self) -> &[DictionaryEntry];

    /// Entries whose kanji or reading equals `query`
    fn lookup_exact(&self, query: &str) -> Vec<&DictionaryEntry>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

/// In-memory corpus with exact-match indices on kanji and reading
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    name: String,
    entries: Vec<DictionaryEntry>,
    kanji_index: HashMap<String, Vec<usize>>,
    reading_index: HashMap<String, Vec<usize>>,
}

impl Corpus {
    /// Build a corpus, dropping entries without a headword
    pub fn new(name: impl Into<String>, entries: Vec<DictionaryEntry>) -> Self {
        let before = entries.len();
        let entries: Vec<DictionaryEntry> = entries
            .into_iter()
            .filter(|e| !e.kanji.trim().is_empty())
            .collect();

        if entries.len() < before {
            tracing::warn!("Skipped {} entries without kanji", before - entries.len());
        }

        let mut corpus = Self {
            name: name.into(),
            entries,
            kanji_index: HashMap::new(),
            reading_index: HashMap::new(),
        };
        corpus.reindex();
        corpus
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another corpus into this one.
    /// Entries from `other` with the same `(kanji, reading)` replace existing ones.
    pub fn merge(mut self, other: Corpus) -> Self {
        let incoming: HashSet<(String, String)> = other
            .entries
            .iter()
            .map(|e| (e.kanji.clone(), e.reading.clone()))
            .collect();

        self.entries
            .retain(|e| !incoming.contains(&(e.kanji.clone(), e.reading.clone())));
        self.entries.extend(other.entries);
        self.reindex();
        self
    }

    fn reindex(&mut self) {
        self.kanji_index.clear();
        self.reading_index.clear();

        for (idx, entry) in self.entries.iter().enumerate() {
            self.kanji_index.entry(entry.kanji.clone()).or_default().push(idx);
            if !entry.reading.is_empty() {
                self.reading_index.entry(entry.reading.clone()).or_default().push(idx);
            }
        }
    }
}

impl Dictionary for Corpus {
    fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    fn lookup_exact(&self, query: &str) -> Vec<&DictionaryEntry> {
        let query = query.trim();
        let mut result_indices: Vec<usize> = Vec::new();

        if let Some(indices) = self.kanji_index.get(query) {
            result_indices.extend(indices);
        }
        if let Some(indices) = self.reading_index.get(query) {
            result_indices.extend(indices);
        }

        result_indices.sort_unstable();
        result_indices.dedup();

        result_indices
            .into_iter()
            .filter_map(|idx| self.entries.get(idx))
            .collect()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            language: "ja-vi".to_string(),
            entry_count: self.entries.len(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kanji: &str, reading: &str, meaning: &str) -> DictionaryEntry {
        DictionaryEntry::new(kanji, reading).with_sense(&[], &[meaning])
    }

    #[test]
    fn drops_entries_without_kanji() {
        let corpus = Corpus::new(
            "test",
            vec![entry("", "あ", "x"), entry("  ", "", "y"), entry("安い", "やすい", "rẻ")],
        );
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.metadata().entry_count, 1);
    }

    #[test]
    fn lookup_by_kanji_or_reading() {
        let corpus = Corpus::new(
            "test",
            vec![entry("厚い", "あつい", "dày"), entry("熱い", "あつい", "nóng")],
        );
        assert_eq!(corpus.lookup_exact("厚い").len(), 1);
        assert_eq!(corpus.lookup_exact("あつい").len(), 2);
        assert!(corpus.lookup_exact("さむい").is_empty());
    }

    #[test]
    fn merge_overrides_same_key() {
        let base = Corpus::new(
            "base",
            vec![entry("厚い", "あつい", "dày"), entry("安い", "やすい", "rẻ")],
        );
        let extra = Corpus::new("extra", vec![entry("厚い", "あつい", "dày dặn")]);

        let merged = base.merge(extra);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.lookup_exact("厚い")[0].first_meaning(), "dày dặn");
        assert_eq!(merged.lookup_exact("安い").len(), 1);
    }
}
