//! Bounded log of recently generated partitions.
//!
//! Entries are stored most-recent-first and are never mutated after being
//! recorded. Recording past capacity silently evicts the oldest entry.

use crate::Partition;

pub const HISTORY_CAPACITY: usize = 10;

/// A partition snapshot with the local time it was generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    partition: Partition,
    timestamp: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(partition: Partition, timestamp: impl Into<String>) -> Self {
        Self {
            partition,
            timestamp: timestamp.into(),
        }
    }

    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, keeping only the `HISTORY_CAPACITY` most recent.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// All retained entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Entries older than the latest one.
    ///
    /// The latest entry is already on screen as the current teams, so the
    /// history panel only lists these.
    #[must_use]
    pub fn previous(&self) -> &[HistoryEntry] {
        self.entries.get(1..).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
