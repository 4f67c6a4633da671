//! Generated query history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;
use zqlz_core::QueryDialect;

/// Number of entries kept when no limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// A single generated query
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique identifier
    pub id: Uuid,

    /// Dialect the text was generated for
    pub dialect: QueryDialect,

    /// The generated text
    pub text: String,

    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(dialect: QueryDialect, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            dialect,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Generated query history, most recent first
#[derive(Clone, Debug)]
pub struct QueryHistory {
    entries: VecDeque<HistoryEntry>,

    /// Maximum entries to keep
    max_entries: usize,
}

impl QueryHistory {
    /// Create a new history; a limit of zero is raised to one
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Add an entry, evicting the oldest beyond the cap
    pub fn add(&mut self, entry: HistoryEntry) {
        tracing::debug!(
            entry_id = %entry.id,
            dialect = entry.dialect.id(),
            text_len = entry.text.len(),
            "adding query to history"
        );
        self.entries.push_front(entry);
        while self.entries.len() > self.max_entries {
            self.entries.pop_back();
        }
    }

    /// Record generated text and return the new entry's id
    pub fn record(&mut self, dialect: QueryDialect, text: impl Into<String>) -> Uuid {
        let entry = HistoryEntry::new(dialect, text);
        let id = entry.id;
        self.add(entry);
        id
    }

    /// Get all entries
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Get entries for a specific dialect
    pub fn for_dialect(&self, dialect: QueryDialect) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(move |e| e.dialect == dialect)
    }

    /// Search history by text content, case-insensitively
    pub fn search(&self, query: &str) -> impl Iterator<Item = &HistoryEntry> {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| e.text.to_lowercase().contains(&query_lower))
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        let count = self.entries.len();
        tracing::info!(entries_cleared = count, "clearing query history");
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_capped() {
        let mut history = QueryHistory::default();
        for i in 0..12 {
            history.record(QueryDialect::Sql, format!("SELECT {};", i));
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
        let texts: Vec<&str> = history.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(texts.first(), Some(&"SELECT 11;"));
        assert_eq!(texts.last(), Some(&"SELECT 2;"));
    }

    #[test]
    fn test_record_returns_id() {
        let mut history = QueryHistory::new(3);
        let id = history.record(QueryDialect::Mongo, "db.users.drop();");
        let latest = history.latest().unwrap();
        assert_eq!(latest.id, id);
        assert_eq!(latest.dialect, QueryDialect::Mongo);
    }

    #[test]
    fn test_filters() {
        let mut history = QueryHistory::new(5);
        history.record(QueryDialect::Sql, "DROP TABLE users;");
        history.record(QueryDialect::Mongo, "db.users.drop();");
        history.record(QueryDialect::Sql, "TRUNCATE TABLE logs;");

        assert_eq!(history.for_dialect(QueryDialect::Sql).count(), 2);
        assert_eq!(history.search("USERS").count(), 2);
        assert_eq!(history.search("truncate").count(), 1);
    }

    #[test]
    fn test_clear_and_zero_limit() {
        let mut history = QueryHistory::new(0);
        assert_eq!(history.max_entries(), 1);
        history.record(QueryDialect::Sql, "a");
        history.record(QueryDialect::Sql, "b");
        assert_eq!(history.len(), 1);

        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_entry_serde_shape() {
        let entry = HistoryEntry::new(QueryDialect::Mongo, "db.users.find()");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["dialect"], "mongodb");
        assert!(value.get("createdAt").is_some());
    }
}
