//! Per-type ordered index.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ops::Bound;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::Event;

/// Ordered mapping from timestamp to event for a single type.
///
/// Each index carries its own lock, so operations on different types never
/// contend. The lock is held only for the duration of a single map
/// operation; cursors re-acquire it on every step, which is what makes
/// cursor iteration live rather than snapshot-isolated.
#[derive(Debug, Default)]
pub(crate) struct TypeIndex {
    entries: RwLock<BTreeMap<i64, Arc<Event>>>,
}

impl TypeIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert the event only if its timestamp is unoccupied.
    ///
    /// Returns false when an event already holds the timestamp; the existing
    /// event wins and the new one is dropped.
    pub(crate) fn insert_if_absent(&self, event: Arc<Event>) -> bool {
        match self.entries.write().entry(event.timestamp()) {
            Entry::Vacant(slot) => {
                slot.insert(event);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Look up the event at an exact timestamp.
    pub(crate) fn get(&self, timestamp: i64) -> Option<Arc<Event>> {
        self.entries.read().get(&timestamp).cloned()
    }

    /// Remove the entry at an exact timestamp.
    pub(crate) fn remove(&self, timestamp: i64) -> Option<Arc<Event>> {
        self.entries.write().remove(&timestamp)
    }

    /// The smallest key within `[lower, end)`, where `end` is exclusive.
    ///
    /// `lower` is `Included(start)` for a fresh scan and `Excluded(pos)` when
    /// resuming past an already-visited key. Degenerate ranges (lower bound
    /// at or past `end`) yield nothing.
    pub(crate) fn next_key(&self, lower: Bound<i64>, end: i64) -> Option<i64> {
        let low = match lower {
            Bound::Included(low) | Bound::Excluded(low) => low,
            Bound::Unbounded => i64::MIN,
        };
        // BTreeMap::range panics on inverted bounds; an inverted or empty
        // range is a valid query here and simply matches nothing.
        if low >= end {
            return None;
        }
        self.entries
            .read()
            .range((lower, Bound::Excluded(end)))
            .next()
            .map(|(&timestamp, _)| timestamp)
    }

    /// Number of entries currently indexed.
    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop all entries, returning how many were dropped.
    ///
    /// Events already handed out to callers stay alive through their own
    /// references; only the index entries are released.
    pub(crate) fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let dropped = entries.len();
        entries.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_with(timestamps: &[i64]) -> TypeIndex {
        let index = TypeIndex::new();
        for &timestamp in timestamps {
            assert!(index.insert_if_absent(Arc::new(Event::new("t", timestamp))));
        }
        index
    }

    #[test]
    fn test_first_writer_wins() {
        let index = TypeIndex::new();
        assert!(index.insert_if_absent(Arc::new(Event::new("t", 5))));
        assert!(!index.insert_if_absent(Arc::new(Event::new("t", 5))));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_next_key_bounds() {
        let index = index_with(&[1, 10]);

        assert_eq!(index.next_key(Bound::Included(1), 10), Some(1));
        assert_eq!(index.next_key(Bound::Excluded(1), 10), None);
        assert_eq!(index.next_key(Bound::Excluded(1), 11), Some(10));
        assert_eq!(index.next_key(Bound::Included(2), 10), None);
    }

    #[test]
    fn test_next_key_degenerate_range() {
        let index = index_with(&[1, 2, 3]);

        // Inverted and empty ranges match nothing and must not panic.
        assert_eq!(index.next_key(Bound::Included(10), 0), None);
        assert_eq!(index.next_key(Bound::Included(2), 2), None);
        assert_eq!(index.next_key(Bound::Excluded(2), 2), None);
    }

    #[test]
    fn test_negative_timestamps_ordered() {
        let index = index_with(&[3, -7, 0]);

        assert_eq!(index.next_key(Bound::Included(i64::MIN), i64::MAX), Some(-7));
        assert_eq!(index.next_key(Bound::Excluded(-7), i64::MAX), Some(0));
        assert_eq!(index.next_key(Bound::Excluded(0), i64::MAX), Some(3));
    }

    #[test]
    fn test_clear_reports_dropped() {
        let index = index_with(&[1, 2, 3]);
        assert_eq!(index.clear(), 3);
        assert!(index.is_empty());
        assert_eq!(index.next_key(Bound::Included(i64::MIN), i64::MAX), None);
    }
}
