//! Location-agnostic approximate substring scoring.
//!
//! A key matches when the query can be turned into *some* substring of the
//! key with few enough edits, wherever that substring sits. Scores are
//! `errors / pattern length`, so `0.0` is a perfect match and anything above
//! the threshold is rejected.

/// Score floor for inexact matches, so only a full equality reaches zero.
const MIN_SCORE: f64 = 0.001;

/// Smallest edit distance between `pattern` and any substring of `text`.
///
/// Both sides are compared lowercased and char by char. An empty pattern
/// costs nothing; an empty text costs the whole pattern.
pub fn approximate_errors(pattern: &str, text: &str) -> usize {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();
    approximate_errors_chars(&pattern, &text)
}

fn approximate_errors_chars(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    // column[i] = edits to match pattern[..i] ending at the current text position;
    // row 0 stays 0 because a match may start anywhere
    let mut column: Vec<usize> = (0..=m).collect();
    let mut best = column[m];

    for &t in text {
        let mut diagonal = column[0];
        for i in 1..=m {
            let above = column[i];
            let cost = usize::from(pattern[i - 1] != t);
            column[i] = (diagonal + cost).min(above + 1).min(column[i - 1] + 1);
            diagonal = above;
        }
        best = best.min(column[m]);
    }

    best
}

/// Normalization that makes long multi-word fields weigh less,
/// `1 / sqrt(tokens)` rounded to three decimals.
pub fn field_norm(text: &str) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count().max(1);
    ((1.0 / (tokens as f64).sqrt()) * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone, Copy)]
pub struct FuzzyScorer {
    threshold: f64,
}

impl FuzzyScorer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score `pattern` against one key value, `None` when it does not match.
    pub fn score(&self, pattern: &str, text: &str) -> Option<f64> {
        if pattern.is_empty() || text.trim().is_empty() {
            return None;
        }

        let pattern = pattern.to_lowercase();
        let text = text.to_lowercase();
        if pattern == text {
            return Some(0.0);
        }

        let pattern: Vec<char> = pattern.chars().collect();
        let text: Vec<char> = text.chars().collect();
        let errors = approximate_errors_chars(&pattern, &text);
        let score = errors as f64 / pattern.len() as f64;

        (score <= self.threshold).then(|| score.max(MIN_SCORE))
    }
}

/// Combine per-key scores into one entry score, lower is better.
///
/// Each item is `(key score, normalized weight, field norm)`.
pub fn combine(scores: impl IntoIterator<Item = (f64, f64, f64)>) -> f64 {
    scores
        .into_iter()
        .fold(1.0, |total, (score, weight, norm)| {
            let score = if score == 0.0 { f64::EPSILON } else { score };
            total * score.powf(weight * norm)
        })
}
