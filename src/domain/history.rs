use super::optimization::{Language, OptimizationResult};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// One past optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: uuid::Uuid,
    pub language: Language,
    pub original_code: String,
    pub optimized_code: String,
    #[serde(default)]
    pub improvements: Vec<String>,
    /// Creation timestamp in RFC3339 format.
    pub created_at: String,
}

impl HistoryEntry {
    pub fn new(language: Language, original_code: &str, result: &OptimizationResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            language,
            original_code: original_code.to_string(),
            optimized_code: result.optimized_code.clone(),
            improvements: result.improvements.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Most-recent-first log that never holds more than `limit` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    limit: usize,
    entries: VecDeque<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Rebuild a log from stored entries, newest first, dropping the overflow.
    pub fn from_entries(limit: usize, entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
        let mut history = Self::with_limit(limit);
        history.entries = entries.into_iter().take(history.limit).collect();
        history
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
