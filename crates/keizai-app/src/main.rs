use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use keizai_core::dictionary::Dictionary;
use keizai_core::highlight::split;
use keizai_core::language::Transliterator;
use keizai_core::preprocess::{DefaultPreprocessor, Preprocessor};
use keizai_lang_japanese::{WanaKanaTransliterator, highlight_variations};
use keizai_types::DictionaryEntry;
use tracing_subscriber::EnvFilter;

pub mod io;
pub mod state;

use self::state::AppState;

#[derive(Parser)]
#[command(name = "keizai", about = "Japanese economic adjectives for Vietnamese learners")]
struct Cli {
    /// JSON config file; environment variables are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Corpus file, overrides the configured one
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dropdown suggestions for a partial query
    Suggest { query: String },
    /// Exact lookup by kanji or reading, falling back to suggestions
    Lookup { query: String },
    /// Accent-insensitive highlight of `term` inside `text`
    Highlight { text: String, term: String },
    /// Show or clear recent searches
    History {
        #[arg(long)]
        clear: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = io::load_config(cli.config.as_deref())?;
    if let Some(corpus) = &cli.corpus {
        config.dictionary.corpus_path = corpus.display().to_string();
    }

    match cli.command {
        Command::Highlight { text, term } => {
            let state = AppState::without_corpus(config);
            println!("{}", state.highlighter.highlight(&text, &term));
        }
        Command::History { clear } => {
            let mut state = AppState::without_corpus(config);
            if clear {
                state.history.clear();
                state.save_history()?;
                tracing::info!("Search history cleared");
            } else {
                for query in state.history.recent(state.config.history.capacity) {
                    println!("{query}");
                }
            }
        }
        Command::Suggest { query } => {
            let query = DefaultPreprocessor.process(&query);
            let state = AppState::load(config)?;
            for entry in state.suggest(&query) {
                println!("{}", summary_line(entry));
            }
        }
        Command::Lookup { query } => {
            let query = DefaultPreprocessor.process(&query);
            let mut state = AppState::load(config)?;
            let exact = state.corpus.lookup_exact(&query);
            let entries = if exact.is_empty() {
                tracing::debug!("No exact match for {query}, using suggestions");
                state.suggest(&query)
            } else {
                exact
            };

            if entries.is_empty() {
                println!("Không tìm thấy kết quả cho \"{query}\"");
            }
            for entry in &entries {
                print_entry(&state, entry, &query);
            }

            state.history.record(&query);
            state.save_history()?;
        }
    }

    Ok(())
}

fn summary_line(entry: &DictionaryEntry) -> String {
    format!(
        "{}\t{} ({})\t{}",
        entry.kanji,
        entry.reading,
        WanaKanaTransliterator.to_romaji(&entry.reading),
        entry.first_meaning()
    )
}

fn print_entry(state: &AppState, entry: &DictionaryEntry, query: &str) {
    println!("{}", summary_line(entry));

    for sense in &entry.meanings {
        let defs: Vec<String> = sense
            .defs
            .iter()
            .map(|d| state.highlighter.highlight(d, query))
            .collect();
        println!("  [{}] {}", sense.pos.join(", "), defs.join("; "));
    }

    if let Some(example) = &entry.example {
        let reading = (!entry.reading.is_empty()).then_some(entry.reading.as_str());
        println!(
            "  例: {}",
            highlight_variations(example, &entry.kanji, reading, &state.highlighter)
        );
    }

    if let Some(translation) = &entry.translation {
        // highlight the query when it occurs, else the entry's own meaning
        let term = if split(translation, query).is_some() {
            query
        } else {
            entry.first_meaning()
        };
        println!("  VN: {}", state.highlighter.highlight(translation, term));
    }
}
