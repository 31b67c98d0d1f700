//! Ordered, name-unique list of confirmed icons
//!
//! Append-only: entries keep the order in which they were first inserted,
//! and that order is the display order.

use crate::types::Entry;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless an entry with the same name already exists.
    ///
    /// Names compare case-insensitively. A duplicate is a silent no-op;
    /// the return value only reports whether anything was appended.
    pub fn insert_if_absent(&mut self, entry: Entry) -> bool {
        if self.contains(&entry.name) {
            debug!("Skipping duplicate entry: {}", entry.name);
            return false;
        }

        debug!("Adding entry: {}", entry.name);
        self.entries.push(entry);
        true
    }

    /// Whether an entry named `name` (any case) is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.has_name(name))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
