use std::collections::HashSet;

use keizai_config::search::{KeyWeights, SearchConfig};
use keizai_types::DictionaryEntry;

use crate::fuzzy::{FuzzyScorer, combine, field_norm};
use crate::language::Transliterator;
use crate::preprocess::strip_vietnamese;

/// Keys derived from an entry for one query cycle. Never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKeys {
    pub romaji_reading: String,
    pub kana_normalized_reading: String,
    pub stripped_first_meaning: String,
}

impl DerivedKeys {
    pub fn derive(entry: &DictionaryEntry, transliterator: &impl Transliterator) -> Self {
        let romaji_reading = transliterator.to_romaji(&entry.reading);
        let kana_normalized_reading = transliterator.to_kana(&romaji_reading);
        let stripped_first_meaning = strip_vietnamese(entry.first_meaning());

        Self {
            romaji_reading,
            kana_normalized_reading,
            stripped_first_meaning,
        }
    }
}

/// One ranked candidate from a single fuzzy pass
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    pub entry: &'a DictionaryEntry,
    /// Combined weighted score, lower is closer
    pub score: f64,
}

/// Ranks dictionary entries against what the user has typed so far.
///
/// Each entry is matched on its kanji, reading, first meaning, the
/// accent-stripped first meaning, and the romaji and kana forms of its
/// reading. The query is tried as typed and again with Vietnamese accents
/// removed, so `"day dan"`, `"dày dặn"`, `"atsui"` and `"あつい"` all reach
/// the same entry.
pub struct SuggestionMatcher<T> {
    scorer: FuzzyScorer,
    weights: KeyWeights,
    limit: usize,
    transliterator: T,
}

impl<T: Transliterator> SuggestionMatcher<T> {
    pub fn new(config: &SearchConfig, transliterator: T) -> Self {
        Self {
            scorer: FuzzyScorer::new(config.threshold),
            weights: config.weights,
            limit: config.limit,
            transliterator,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// At most `limit` distinct entries for `query`, best first.
    ///
    /// Blank queries and empty corpora yield nothing.
    pub fn suggest<'a>(&self, corpus: &'a [DictionaryEntry], query: &str) -> Vec<&'a DictionaryEntry> {
        let query = query.trim();
        if query.is_empty() || corpus.is_empty() {
            return vec![];
        }

        let keys: Vec<DerivedKeys> = corpus
            .iter()
            .map(|entry| DerivedKeys::derive(entry, &self.transliterator))
            .collect();

        let raw = self.rank_with_keys(corpus, &keys, query);

        let stripped_query = strip_vietnamese(query);
        let stripped = if !stripped_query.is_empty() && stripped_query != query {
            self.rank_with_keys(corpus, &keys, &stripped_query)
        } else {
            vec![]
        };

        tracing::trace!(
            query,
            raw = raw.len(),
            stripped = stripped.len(),
            "fuzzy passes finished"
        );

        let mut seen = HashSet::new();
        let suggestions: Vec<&DictionaryEntry> = raw
            .into_iter()
            .chain(stripped)
            .map(|result| result.entry)
            .filter(|entry| seen.insert(entry.key()))
            .take(self.limit)
            .collect();

        tracing::debug!(query, count = suggestions.len(), "suggestions ready");

        suggestions
    }

    /// Single fuzzy pass of `pattern` over the corpus, sorted by score.
    pub fn rank<'a>(&self, corpus: &'a [DictionaryEntry], pattern: &str) -> Vec<MatchResult<'a>> {
        let keys: Vec<DerivedKeys> = corpus
            .iter()
            .map(|entry| DerivedKeys::derive(entry, &self.transliterator))
            .collect();
        self.rank_with_keys(corpus, &keys, pattern)
    }

    fn rank_with_keys<'a>(
        &self,
        corpus: &'a [DictionaryEntry],
        keys: &[DerivedKeys],
        pattern: &str,
    ) -> Vec<MatchResult<'a>> {
        let total = self.weights.total();
        if pattern.is_empty() || total <= 0.0 {
            return vec![];
        }

        let mut results: Vec<MatchResult<'a>> = corpus
            .iter()
            .zip(keys)
            .filter_map(|(entry, derived)| {
                let fields = [
                    (entry.kanji.as_str(), self.weights.kanji),
                    (entry.reading.as_str(), self.weights.reading),
                    (entry.first_meaning(), self.weights.first_meaning),
                    (derived.stripped_first_meaning.as_str(), self.weights.stripped_meaning),
                    (derived.romaji_reading.as_str(), self.weights.romaji),
                    (derived.kana_normalized_reading.as_str(), self.weights.kana),
                ];

                let matched: Vec<(f64, f64, f64)> = fields
                    .iter()
                    .filter_map(|&(value, weight)| {
                        self.scorer
                            .score(pattern, value)
                            .map(|score| (score, weight / total, field_norm(value)))
                    })
                    .collect();

                if matched.is_empty() {
                    return None;
                }

                Some(MatchResult {
                    entry,
                    score: combine(matched),
                })
            })
            .collect();

        // stable: equal scores keep corpus order
        results.sort_by(|a, b| a.score.total_cmp(&b.score));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::IdentityTransliterator;

    fn matcher() -> SuggestionMatcher<IdentityTransliterator> {
        SuggestionMatcher::new(&SearchConfig::default(), IdentityTransliterator)
    }

    fn entry(kanji: &str, reading: &str, meaning: &str) -> DictionaryEntry {
        DictionaryEntry::new(kanji, reading).with_sense(&["adj"], &[meaning])
    }

    #[test]
    fn empty_query_or_corpus_yields_nothing() {
        let corpus = vec![entry("経済的", "けいざいてき", "kinh tế")];
        assert!(matcher().suggest(&corpus, "").is_empty());
        assert!(matcher().suggest(&corpus, "   \t").is_empty());
        assert!(matcher().suggest(&[], "kinh").is_empty());
    }

    #[test]
    fn caps_at_limit() {
        let corpus: Vec<DictionaryEntry> = (0..20)
            .map(|i| entry(&format!("経済{i}"), &format!("けいざい{i}"), "kinh tế"))
            .collect();
        let suggestions = matcher().suggest(&corpus, "kinh");
        assert_eq!(suggestions.len(), 8);
    }

    #[test]
    fn dedups_on_kanji_and_reading() {
        let corpus = vec![
            entry("厚い", "あつい", "dày"),
            entry("厚い", "あつい", "dày dặn"),
            entry("厚い", "こうい", "dày"),
        ];
        let suggestions = matcher().suggest(&corpus, "厚い");
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].key(), ("厚い", "あつい"));
        assert_eq!(suggestions[1].key(), ("厚い", "こうい"));
    }

    #[test]
    fn matches_meaning_without_diacritics() {
        let corpus = vec![
            entry("安い", "やすい", "rẻ"),
            entry("厚い", "あつい", "dày dặn"),
        ];
        let suggestions = matcher().suggest(&corpus, "day dan");
        assert_eq!(suggestions.first().map(|e| e.kanji.as_str()), Some("厚い"));
    }

    #[test]
    fn unmatched_query_is_empty() {
        let corpus = vec![entry("安い", "やすい", "rẻ")];
        assert!(matcher().suggest(&corpus, "zzzzzz").is_empty());
    }

    #[test]
    fn missing_reading_and_meaning_do_not_panic() {
        let corpus = vec![DictionaryEntry::new("経済", "")];
        assert_eq!(matcher().suggest(&corpus, "経済").len(), 1);
        assert!(matcher().suggest(&corpus, "kinh").is_empty());
    }

    #[test]
    fn exact_headword_ranks_first() {
        let corpus = vec![
            entry("経済学的", "けいざいがくてき", "thuộc kinh tế học"),
            entry("経済的", "けいざいてき", "kinh tế"),
        ];
        let ranked = matcher().rank(&corpus, "経済的");
        assert_eq!(ranked[0].entry.kanji, "経済的");
        assert!(ranked[0].score < ranked[1].score);
    }

    #[test]
    fn raw_pass_wins_ties_over_stripped_pass() {
        // "tế" only matches the accented entry on the raw pass; the stripped
        // pass also finds the unaccented one, which must come after
        let corpus = vec![
            entry("A", "", "te"),
            entry("B", "", "tế"),
        ];
        let suggestions = matcher().suggest(&corpus, "tế");
        let kanji: Vec<&str> = suggestions.iter().map(|e| e.kanji.as_str()).collect();
        assert_eq!(kanji.first(), Some(&"B"));
        assert!(kanji.contains(&"A"));
    }

    #[test]
    fn derived_keys_are_computed_from_reading_and_meaning() {
        let keys = DerivedKeys::derive(&entry("厚い", "あつい", "Dày dặn"), &IdentityTransliterator);
        assert_eq!(keys.romaji_reading, "あつい");
        assert_eq!(keys.kana_normalized_reading, "あつい");
        assert_eq!(keys.stripped_first_meaning, "daydan");
    }
}
