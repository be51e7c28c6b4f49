//! Optional request log.
//!
//! Analysis never reads from the store; it only receives a compact entry per
//! handled request when the host supplies one. Retention beyond the
//! in-memory cap is the host's job: drain or replace the store as needed.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub operation: String,
    pub text_len: usize,
    /// Risk level, failure count or error code, depending on the operation.
    pub outcome: String,
}

/// Key-value storage for [`LogEntry`] records.
pub trait EntryStore {
    fn get(&self, key: &str) -> Option<LogEntry>;

    /// Insert or replace, returning the previous entry.
    fn put(&mut self, key: String, entry: LogEntry) -> Option<LogEntry>;

    fn delete(&mut self, key: &str) -> Option<LogEntry>;
}

/// Entries kept by [`MemoryEntryStore::new`].
pub const DEFAULT_STORE_CAPACITY: usize = 10_000;

/// In-memory store holding at most `capacity` entries; inserting past the cap
/// evicts the oldest key.
#[derive(Debug, Clone)]
pub struct MemoryEntryStore {
    entries: BTreeMap<String, LogEntry>,
    order: VecDeque<String>,
    capacity: usize,
}

impl Default for MemoryEntryStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_STORE_CAPACITY)
    }
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl EntryStore for MemoryEntryStore {
    fn get(&self, key: &str) -> Option<LogEntry> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: String, entry: LogEntry) -> Option<LogEntry> {
        let previous = self.entries.insert(key.clone(), entry);
        if previous.is_none() {
            self.order.push_back(key);
            while self.order.len() > self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
        }
        previous
    }

    fn delete(&mut self, key: &str) -> Option<LogEntry> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.order.retain(|k| k != key);
        }
        removed
    }
}
