use keizai_config::highlight::HighlightConfig;
use keizai_types::HighlightSpan;
use unicode_normalization::char::is_combining_mark;

use crate::preprocess::{StrippedText, strip_vietnamese};

/// Original text cut around a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

/// Locate the first accent-, case- and whitespace-insensitive occurrence of
/// `term` in `text`, as a byte range into `text`.
///
/// Matching runs on the stripped forms, then the position map carries the
/// match back to the original text so the returned range covers the
/// characters exactly as they were written (`"dày"` for a search of
/// `"day"`).
pub fn find_span(text: &str, term: &str) -> Option<HighlightSpan> {
    if text.is_empty() || term.is_empty() {
        return None;
    }

    let stripped_term = strip_vietnamese(term);
    let term_len = stripped_term.chars().count();
    if term_len == 0 {
        return None;
    }

    let stripped = StrippedText::new(text);
    let first = stripped.find(&stripped_term)?;
    let last = first + term_len - 1;

    let start = stripped.origin(first)?;
    let last_origin = stripped.origin(last)?;

    let mut end = last_origin + text[last_origin..].chars().next()?.len_utf8();
    // decomposed input: keep trailing combining marks with their base letter
    for c in text[end..].chars() {
        if !is_combining_mark(c) {
            break;
        }
        end += c.len_utf8();
    }

    Some(HighlightSpan { start, end })
}

/// [`find_span`] as before/matched/after slices
pub fn split<'a>(text: &'a str, term: &str) -> Option<Segments<'a>> {
    let span = find_span(text, term)?;
    Some(Segments {
        before: &text[..span.start],
        matched: &text[span.range()],
        after: &text[span.end..],
    })
}

/// Wraps matched spans in configurable markers
#[derive(Debug, Clone)]
pub struct Highlighter {
    open: String,
    close: String,
}

impl Highlighter {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::new(config.open.clone(), config.close.clone())
    }

    /// `text` with its first match of `term` wrapped, or `text` unchanged
    pub fn highlight(&self, text: &str, term: &str) -> String {
        match split(text, term) {
            Some(segments) => self.wrap(segments),
            None => text.to_string(),
        }
    }

    /// Wrap every span; spans must be sorted and non-overlapping
    pub fn wrap_spans(&self, text: &str, spans: &[HighlightSpan]) -> String {
        let mut out = String::with_capacity(text.len() + spans.len() * (self.open.len() + self.close.len()));
        let mut cursor = 0;
        for span in spans {
            if span.start < cursor || span.end > text.len() {
                continue;
            }
            out.push_str(&text[cursor..span.start]);
            out.push_str(&self.open);
            out.push_str(&text[span.range()]);
            out.push_str(&self.close);
            cursor = span.end;
        }
        out.push_str(&text[cursor..]);
        out
    }

    fn wrap(&self, segments: Segments<'_>) -> String {
        format!(
            "{}{}{}{}{}",
            segments.before, self.open, segments.matched, self.close, segments.after
        )
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::from_config(&HighlightConfig::default())
    }
}

/// Highlight with the default `<mark>` markers
pub fn highlight(text: &str, term: &str) -> String {
    Highlighter::default().highlight(text, term)
}
