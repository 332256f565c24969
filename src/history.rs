//! Bounded, newest-first log of generated passwords.

use std::collections::VecDeque;
use std::fmt;

use time::OffsetDateTime;
use zeroize::Zeroizing;

pub const HISTORY_CAPACITY: usize = 10;

#[derive(Clone)]
pub struct HistoryEntry {
    password: Zeroizing<String>,
    timestamp: OffsetDateTime,
    strength: u8,
}

impl HistoryEntry {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }
}

impl fmt::Debug for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEntry")
            .field("password", &"<redacted>")
            .field("timestamp", &self.timestamp)
            .field("strength", &self.strength)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, password: &str, strength: u8) {
        self.record_at(password, strength, OffsetDateTime::now_utc());
    }

    pub fn record_at(&mut self, password: &str, strength: u8, timestamp: OffsetDateTime) {
        self.entries.push_front(HistoryEntry {
            password: Zeroizing::new(password.to_owned()),
            timestamp,
            strength,
        });
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
