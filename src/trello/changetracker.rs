//! Local change tracking.
//!
//! A [`ChangeTracker`] remembers, per field, the value last confirmed by the
//! server and the latest value assigned locally. Assigning a field back to
//! its confirmed value drops it from the pending set.

use std::collections::BTreeMap;

use crate::trello::value::Value;

/// A single field transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    /// Value before the first local assignment since the last commit.
    pub old: Value,
    /// Latest locally assigned value.
    pub new: Value,
}

/// Pending and most recently committed changes of one entity.
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    pending: BTreeMap<&'static str, Change>,
    previous: BTreeMap<&'static str, Change>,
}

impl ChangeTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assignment of `field` from `old` to `new`.
    pub fn record(&mut self, field: &'static str, old: Value, new: Value) {
        if let Some(change) = self.pending.get(field) {
            if change.old == new {
                self.pending.remove(field);
                return;
            }
        }
        if let Some(change) = self.pending.get_mut(field) {
            change.new = new;
            return;
        }
        if old != new {
            self.pending.insert(field, Change { old, new });
        }
    }

    /// Field name to latest value for every pending change.
    pub fn diff(&self) -> BTreeMap<&'static str, Value> {
        self.pending
            .iter()
            .map(|(field, change)| (*field, change.new.clone()))
            .collect()
    }

    /// Pending transitions with their original values.
    pub fn changes(&self) -> &BTreeMap<&'static str, Change> {
        &self.pending
    }

    /// The change set of the most recent commit.
    pub fn previous_changes(&self) -> &BTreeMap<&'static str, Change> {
        &self.previous
    }

    /// True when any field has a pending change.
    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    /// True when `field` has a pending change.
    pub fn is_changed(&self, field: &str) -> bool {
        self.pending.contains_key(field)
    }

    /// Move the pending changes into the previous record.
    pub fn commit(&mut self) {
        self.previous = std::mem::take(&mut self.pending);
    }

    /// Forget pending changes without touching the previous record.
    pub(crate) fn discard(&mut self) {
        self.pending.clear();
    }
}
