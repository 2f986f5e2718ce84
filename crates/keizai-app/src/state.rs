use std::path::PathBuf;

use keizai_config::Config;
use keizai_core::dictionary::{Corpus, Dictionary};
use keizai_core::highlight::Highlighter;
use keizai_core::history::SearchHistory;
use keizai_core::suggest::SuggestionMatcher;
use keizai_lang_japanese::{CorpusLoader, WanaKanaTransliterator};
use keizai_types::DictionaryEntry;

use crate::io;

/// Everything one CLI invocation needs, built once from config
pub struct AppState {
    pub config: Config,
    pub corpus: Corpus,
    pub matcher: SuggestionMatcher<WanaKanaTransliterator>,
    pub highlighter: Highlighter,
    pub history: SearchHistory,
    history_path: PathBuf,
}

impl AppState {
    /// Build state and load the configured corpus
    pub fn load(config: Config) -> anyhow::Result<Self> {
        let corpus = CorpusLoader::load_configured(&config.dictionary)?;
        tracing::info!(
            "Corpus {} ready with {} entries",
            corpus.name(),
            corpus.len()
        );
        Ok(Self::with_corpus(config, corpus))
    }

    /// State for commands that never touch the corpus
    pub fn without_corpus(config: Config) -> Self {
        Self::with_corpus(config, Corpus::default())
    }

    pub fn with_corpus(config: Config, corpus: Corpus) -> Self {
        let history_path = PathBuf::from(&config.history.path);
        let history = io::load_history(&history_path, config.history.capacity);

        Self {
            matcher: SuggestionMatcher::new(&config.search, WanaKanaTransliterator),
            highlighter: Highlighter::from_config(&config.highlight),
            corpus,
            history,
            history_path,
            config,
        }
    }

    pub fn suggest(&self, query: &str) -> Vec<&DictionaryEntry> {
        self.matcher.suggest(self.corpus.entries(), query)
    }

    pub fn save_history(&self) -> anyhow::Result<()> {
        io::save_history(&self.history_path, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use keizai_config::history::HistoryConfig;

    use super::*;

    #[test]
    fn suggests_from_loaded_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            history: HistoryConfig {
                path: dir.path().join("history.json").display().to_string(),
                ..HistoryConfig::default()
            },
            ..Config::default()
        };
        let corpus = CorpusLoader::from_json(
            "test",
            r#"[{ "kanji": "合理的", "reading": "ごうりてき", "senses": [{ "defs": ["hợp lý"] }] }]"#,
        )
        .unwrap();

        let mut state = AppState::with_corpus(config, corpus);
        assert_eq!(state.suggest("gouriteki").len(), 1);
        assert_eq!(state.suggest("hop ly").len(), 1);

        state.history.record("hop ly");
        state.save_history().unwrap();

        let reloaded = AppState::with_corpus(state.config.clone(), Corpus::default());
        assert_eq!(reloaded.history.recent(1).collect::<Vec<_>>(), vec!["hop ly"]);
    }
}
