use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, which covers every Vietnamese tone
/// and vowel mark once the text is decomposed.
fn is_vietnamese_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Accent-, case- and whitespace-insensitive form of `s`.
///
/// `"Kinh tế"` becomes `"kinhte"`. Letters without a decomposition (`đ`)
/// are kept as they are.
pub fn strip_vietnamese(s: &str) -> String {
    fold(s).filter(|c| !c.is_whitespace()).collect()
}

/// Like [`strip_vietnamese`] but keeps whitespace in place.
pub fn strip_vietnamese_keep_spaces(s: &str) -> String {
    fold(s).collect()
}

fn fold(s: &str) -> impl Iterator<Item = char> {
    s.nfc()
        .collect::<String>()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_vietnamese_mark(*c))
        .collect::<Vec<_>>()
        .into_iter()
}

/// Stripped text plus, for every stripped char, the byte offset of the
/// original char it came from.
///
/// Each original char is stripped on its own, so one original char
/// contributes zero (whitespace, lone combining marks), one, or several
/// stripped chars, and all of them point back to that same offset.
#[derive(Debug, Clone)]
pub struct StrippedText {
    stripped: String,
    origins: Vec<usize>,
}

impl StrippedText {
    pub fn new(text: &str) -> Self {
        let mut stripped = String::with_capacity(text.len());
        let mut origins = Vec::with_capacity(text.len());
        let mut buf = [0u8; 4];

        for (offset, c) in text.char_indices() {
            let folded = strip_vietnamese(c.encode_utf8(&mut buf));
            for s in folded.chars() {
                stripped.push(s);
                origins.push(offset);
            }
        }

        Self { stripped, origins }
    }

    pub fn as_str(&self) -> &str {
        &self.stripped
    }

    /// Number of stripped chars, equal to the length of the position map
    pub fn char_len(&self) -> usize {
        self.origins.len()
    }

    /// Original byte offset of the stripped char at `index`
    pub fn origin(&self, index: usize) -> Option<usize> {
        self.origins.get(index).copied()
    }

    /// Char index of the first occurrence of `needle`
    pub fn find(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.stripped
            .find(needle)
            .map(|byte_idx| self.stripped[..byte_idx].chars().count())
    }
}

pub trait Preprocessor {
    // Default query cleanup
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC) folds full-width romaji typed through an IME
        text = text.nfkc().collect();

        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
