use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_threshold() -> f64 {
    0.45
}

fn default_limit() -> usize {
    8
}

/// Fuzzy suggestion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum tolerated `errors / pattern length` for a key to match
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Maximum number of suggestions returned
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub weights: KeyWeights,
}

impl SearchConfig {
    pub fn new() -> Self {
        let threshold = env_parse("SEARCH_THRESHOLD")
            .filter(|t: &f64| (0.0..=1.0).contains(t))
            .unwrap_or_else(default_threshold);
        let limit = env_parse("SEARCH_LIMIT").unwrap_or_else(default_limit);

        Self {
            threshold,
            limit,
            weights: KeyWeights::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            limit: default_limit(),
            weights: KeyWeights::default(),
        }
    }
}

/// Relative weight of each searched key. Only the ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyWeights {
    pub kanji: f64,
    pub reading: f64,
    pub first_meaning: f64,
    pub stripped_meaning: f64,
    pub romaji: f64,
    pub kana: f64,
}

impl KeyWeights {
    pub fn total(&self) -> f64 {
        self.kanji
            + self.reading
            + self.first_meaning
            + self.stripped_meaning
            + self.romaji
            + self.kana
    }
}

impl Default for KeyWeights {
    fn default() -> Self {
        Self {
            kanji: 0.5,
            reading: 0.4,
            first_meaning: 0.1,
            stripped_meaning: 0.35,
            romaji: 0.25,
            kana: 0.2,
        }
    }
}
