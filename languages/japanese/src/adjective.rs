//! Highlighting of inflected adjective forms in Japanese example sentences.
//!
//! Example sentences rarely contain the bare headword: `経済的` shows up as
//! `経済的な` or `経済的に`, `厚い` as `厚く` or `厚さ`. The heuristics below
//! generate the likely surface forms so every one of them can be marked.

use keizai_core::highlight::Highlighter;
use keizai_types::HighlightSpan;
use unicode_normalization::UnicodeNormalization;

/// Likely surface forms of an adjective headword, base form first.
pub fn adjective_variations(word: &str, reading: Option<&str>) -> Vec<String> {
    let base: String = word.trim().nfc().collect();
    let reading = reading.unwrap_or_default();
    if base.is_empty() {
        return vec![];
    }

    let mut variations: Vec<String> = Vec::new();

    let looks_na = base.ends_with('な') || base.ends_with('的') || reading.ends_with('な');
    let looks_i = base.ends_with('い') || reading.ends_with('い');

    if looks_na {
        let stem = base.strip_suffix('な').unwrap_or(&base);
        variations.push(stem.to_string());
        variations.push(base.clone());
        if stem.ends_with('的') {
            variations.push(format!("{stem}な"));
            variations.push(format!("{stem}に"));
        }
    } else if looks_i {
        variations.push(base.clone());
        if let Some(stem) = base.strip_suffix('い') {
            for suffix in ["く", "くて", "さ"] {
                variations.push(format!("{stem}{suffix}"));
            }
        }
    } else {
        // kanji-only headwords whose okurigana was dropped
        variations.push(base.clone());
        for suffix in ["い", "く", "くて"] {
            variations.push(format!("{base}{suffix}"));
        }
    }

    let mut seen = std::collections::HashSet::new();
    variations.retain(|v| !v.is_empty() && seen.insert(v.clone()));
    variations
}

/// Non-overlapping spans of every variation in `text`, left to right.
///
/// At each position the longest variation wins, so `経済的な` is one span
/// rather than `経済的` followed by a stray `な`.
pub fn find_variation_spans(text: &str, word: &str, reading: Option<&str>) -> Vec<HighlightSpan> {
    let mut variations = adjective_variations(word, reading);
    variations.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut spans = Vec::new();
    let mut cursor = 0;
    while cursor < text.len() {
        let rest = &text[cursor..];
        match variations.iter().find(|v| rest.starts_with(v.as_str())) {
            Some(v) => {
                spans.push(HighlightSpan {
                    start: cursor,
                    end: cursor + v.len(),
                });
                cursor += v.len();
            }
            None => {
                cursor += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    spans
}

/// `text` with every adjective form of `word` wrapped by `highlighter`
pub fn highlight_variations(
    text: &str,
    word: &str,
    reading: Option<&str>,
    highlighter: &Highlighter,
) -> String {
    let spans = find_variation_spans(text, word, reading);
    highlighter.wrap_spans(text, &spans)
}
