use keizai_core::language::Transliterator;
use wana_kana::ConvertJapanese;

/// Kana/romaji conversion backed by `wana_kana`
#[derive(Debug, Clone, Copy, Default)]
pub struct WanaKanaTransliterator;

impl Transliterator for WanaKanaTransliterator {
    fn to_romaji(&self, reading: &str) -> String {
        reading.to_romaji()
    }

    fn to_kana(&self, romaji: &str) -> String {
        romaji.to_kana()
    }
}
