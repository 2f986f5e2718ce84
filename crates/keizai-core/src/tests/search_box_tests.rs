use keizai_config::search::SearchConfig;
use keizai_types::DictionaryEntry;

use crate::dictionary::{Corpus, Dictionary};
use crate::highlight::{Highlighter, find_span, highlight};
use crate::language::IdentityTransliterator;
use crate::suggest::SuggestionMatcher;

fn corpus() -> Corpus {
    let entries = vec![
        DictionaryEntry::new("経済的", "けいざいてき").with_sense(&["na-adj"], &["kinh tế"]),
        DictionaryEntry::new("金融的", "きんゆうてき").with_sense(&["na-adj"], &["tài chính"]),
        DictionaryEntry::new("商業的", "しょうぎょうてき").with_sense(&["na-adj"], &["thương mại"]),
        DictionaryEntry::new("国際的", "こくさいてき").with_sense(&["na-adj"], &["quốc tế"]),
        DictionaryEntry::new("消費的", "しょうひてき").with_sense(&["na-adj"], &["tiêu dùng"]),
        DictionaryEntry::new("効率的", "こうりつてき").with_sense(&["na-adj"], &["hiệu quả"]),
        DictionaryEntry::new("合理的", "ごうりてき").with_sense(&["na-adj"], &["hợp lý"]),
        DictionaryEntry::new("厚い", "あつい").with_sense(&["i-adj"], &["dày dặn"]),
        DictionaryEntry::new("安い", "やすい").with_sense(&["i-adj"], &["rẻ"]),
        DictionaryEntry::new("高い", "たかい").with_sense(&["i-adj"], &["đắt"]),
    ];
    Corpus::new("economic adjectives", entries)
}

#[test]
fn suggestions_never_exceed_limit_or_repeat() {
    let corpus = corpus();
    let matcher = SuggestionMatcher::new(&SearchConfig::default(), IdentityTransliterator);

    for query in ["的", "てき", "t", "a", "kinh", "経済", "i"] {
        let suggestions = matcher.suggest(corpus.entries(), query);
        assert!(suggestions.len() <= 8, "{query} gave {}", suggestions.len());

        let mut keys: Vec<(&str, &str)> = suggestions.iter().map(|e| e.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), suggestions.len(), "{query} repeated an entry");
    }
}

#[test]
fn accentless_query_finds_vietnamese_meaning() {
    let corpus = corpus();
    let matcher = SuggestionMatcher::new(&SearchConfig::default(), IdentityTransliterator);

    let suggestions = matcher.suggest(corpus.entries(), "tai chinh");
    assert_eq!(suggestions.first().map(|e| e.kanji.as_str()), Some("金融的"));

    let suggestions = matcher.suggest(corpus.entries(), "day dan");
    assert!(suggestions.iter().any(|e| e.kanji == "厚い"));
}

#[test]
fn configured_limit_is_respected() {
    let corpus = corpus();
    let config = SearchConfig {
        limit: 2,
        ..SearchConfig::default()
    };
    let matcher = SuggestionMatcher::new(&config, IdentityTransliterator);
    assert!(matcher.suggest(corpus.entries(), "てき").len() <= 2);
}

#[test]
fn lookup_then_highlight_translation() {
    let corpus = corpus();
    let entry = corpus.lookup_exact("厚い")[0];
    let text = "Cái vải này dày dặn quá";

    assert_eq!(
        highlight(text, entry.first_meaning()),
        "Cái vải này <mark>dày dặn</mark> quá"
    );

    let span = find_span(text, "DAY DAN").unwrap();
    assert_eq!(&text[span.range()], "dày dặn");

    let highlighter = Highlighter::new("**", "**");
    assert_eq!(highlighter.highlight("Rất dày dặn", "day"), "Rất **dày** dặn");
}
