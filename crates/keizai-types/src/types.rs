use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A dictionary headword with its reading and Vietnamese senses.
///
/// Field names follow the JSON shape served by the dictionary endpoint
/// (`kanji`, `reading`, `isCommon`, `senses`), so a response body can be
/// deserialized directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub kanji: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub is_common: bool,
    #[serde(default, rename = "senses", alias = "meanings")]
    pub meanings: Vec<Sense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl DictionaryEntry {
    pub fn new(kanji: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            kanji: kanji.into(),
            reading: reading.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper appending a sense group
    pub fn with_sense(mut self, pos: &[&str], defs: &[&str]) -> Self {
        self.meanings.push(Sense {
            pos: pos.iter().map(|p| p.to_string()).collect(),
            defs: defs.iter().map(|d| d.to_string()).collect(),
            tags: vec![],
        });
        self
    }

    /// First definition of the first sense, empty when there is none
    pub fn first_meaning(&self) -> &str {
        self.meanings
            .first()
            .and_then(|sense| sense.defs.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Identity used for deduplication: the same kanji with a different
    /// reading is a distinct entry.
    pub fn key(&self) -> (&str, &str) {
        (&self.kanji, &self.reading)
    }
}

/// One sense group: part-of-speech tags plus ordered definitions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub pos: Vec<String>,
    #[serde(default)]
    pub defs: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Byte range of an emphasized span inside the original, unnormalized text.
///
/// Both ends always fall on `char` boundaries of the text it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
