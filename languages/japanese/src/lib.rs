pub mod adjective;
pub mod loader;
pub mod transliterator;


pub use adjective::{adjective_variations, find_variation_spans, highlight_variations};
pub use loader::CorpusLoader;
pub use transliterator::WanaKanaTransliterator;
