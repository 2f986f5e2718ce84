use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use keizai_config::Config;
use keizai_core::history::SearchHistory;

/// Load config from a JSON file, or from the environment when no file is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let config = serde_json::from_reader(reader)?;
            Ok(config)
        }
        None => Ok(Config::new()),
    }
}

/// Read persisted history; a missing or unreadable file starts empty
pub fn load_history(path: &Path, capacity: usize) -> SearchHistory {
    let loaded = fs::read_to_string(path)
        .ok()
        .and_then(|data| match serde_json::from_str::<SearchHistory>(&data) {
            Ok(history) => Some(history),
            Err(e) => {
                tracing::warn!("Ignoring unreadable history {}: {e}", path.display());
                None
            }
        });

    let mut history = loaded.unwrap_or_else(|| SearchHistory::new(capacity));
    history.set_capacity(capacity);
    history
}

pub fn save_history(path: &Path, history: &SearchHistory) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(history)?)?;
    Ok(())
}
