use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Most-recent-first list of searched queries without duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
    capacity: usize,
    entries: VecDeque<String>,
}

impl SearchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a finished search. Re-searching moves the query back to the front.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.capacity == 0 {
            return;
        }

        self.entries.retain(|q| q != query);
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.capacity);
    }

    pub fn recent(&self, n: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().take(n).map(String::as_str)
    }

    /// Apply a new capacity, dropping the oldest queries if it shrank
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.entries.truncate(capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_first_without_duplicates() {
        let mut history = SearchHistory::new(20);
        history.record("経済的");
        history.record("kinh tế");
        history.record(" 経済的 ");

        let recent: Vec<&str> = history.recent(8).collect();
        assert_eq!(recent, vec!["経済的", "kinh tế"]);
    }

    #[test]
    fn ignores_blank_queries() {
        let mut history = SearchHistory::default();
        history.record("");
        history.record("  ");
        assert!(history.is_empty());
    }

    #[test]
    fn caps_at_capacity() {
        let mut history = SearchHistory::new(3);
        for q in ["a", "b", "c", "d"] {
            history.record(q);
        }
        let recent: Vec<&str> = history.recent(10).collect();
        assert_eq!(recent, vec!["d", "c", "b"]);

        history.set_capacity(1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn survives_json_round_trip() {
        let mut history = SearchHistory::new(5);
        history.record("合理的");
        let json = serde_json::to_string(&history).unwrap();
        let restored: SearchHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
    }
}
