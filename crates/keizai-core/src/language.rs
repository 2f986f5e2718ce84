/// Kana/romaji conversion used to derive extra search keys.
///
/// Implementations must be deterministic; the output is only ever compared,
/// never displayed, so lossy round trips are fine.
pub trait Transliterator: Send + Sync {
    /// Latin transliteration of a kana reading
    fn to_romaji(&self, reading: &str) -> String;

    /// Kana rendering of romanized text
    fn to_kana(&self, romaji: &str) -> String;
}

/// Transliterator that leaves text untouched, for corpora without kana
/// readings or when no conversion library is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransliterator;

impl Transliterator for IdentityTransliterator {
    fn to_romaji(&self, reading: &str) -> String {
        reading.to_string()
    }

    fn to_kana(&self, romaji: &str) -> String {
        romaji.to_string()
    }
}

impl<T: Transliterator + ?Sized> Transliterator for &T {
    fn to_romaji(&self, reading: &str) -> String {
        (**self).to_romaji(reading)
    }

    fn to_kana(&self, romaji: &str) -> String {
        (**self).to_kana(romaji)
    }
}

impl<T: Transliterator + ?Sized> Transliterator for Box<T> {
    fn to_romaji(&self, reading: &str) -> String {
        (**self).to_romaji(reading)
    }

    fn to_kana(&self, romaji: &str) -> String {
        (**self).to_kana(romaji)
    }
}
