//! The top-level event store.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::cursor::EventCursor;
use crate::event::Event;
use crate::index::TypeIndex;

/// Concurrent store of timestamped events grouped by type.
///
/// The store maps each type name to its own [`TypeIndex`]; the table itself
/// is sharded, so inserts, queries and removals on different types proceed
/// without contention, and all operations take `&self`.
///
/// Per-type indexes are reference-counted: a cursor produced by
/// [`query`](Self::query) keeps its index alive even if
/// [`remove_all`](Self::remove_all) detaches that index from the store
/// concurrently.
#[derive(Debug, Default)]
pub struct EventStore {
    indexes: DashMap<String, Arc<TypeIndex>>,
}

impl EventStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an event.
    ///
    /// The per-type index is created on first use; the map's entry API makes
    /// the get-or-create atomic under concurrent first inserts of the same
    /// new type. An event whose (type, timestamp) pair is already occupied
    /// is silently dropped and the stored event retained.
    pub fn insert(&self, event: Event) {
        // Fast path avoids allocating the key for already-known types.
        let index = match self.indexes.get(event.event_type()) {
            Some(index) => Arc::clone(index.value()),
            None => {
                let entry = self
                    .indexes
                    .entry(event.event_type().to_owned())
                    .or_insert_with(|| {
                        debug!(event_type = event.event_type(), "creating type index");
                        Arc::new(TypeIndex::new())
                    });
                Arc::clone(entry.value())
            }
        };

        let timestamp = event.timestamp();
        if !index.insert_if_absent(Arc::new(event)) {
            trace!(timestamp, "duplicate timestamp for type, event dropped");
        }
    }

    /// Remove every event of the given type. No-op for unknown types.
    ///
    /// The index is atomically detached from the table and then cleared: a
    /// concurrent insert of the same type either lands before the detach
    /// (and is dropped with the index) or recreates a fresh index after it.
    /// Cursors still holding the detached index keep observing it.
    pub fn remove_all(&self, event_type: &str) {
        if let Some((_, index)) = self.indexes.remove(event_type) {
            let dropped = index.clear();
            debug!(event_type, dropped, "removed all events of type");
        }
    }

    /// Query events of `event_type` with `start_time <= timestamp < end_time`.
    ///
    /// Unknown types and inverted ranges yield an empty cursor, never an
    /// error. The returned cursor scans the live index; see [`EventCursor`]
    /// for the consistency contract.
    #[must_use]
    pub fn query(&self, event_type: &str, start_time: i64, end_time: i64) -> EventCursor {
        match self.indexes.get(event_type) {
            Some(index) => EventCursor::new(Arc::clone(index.value()), start_time, end_time),
            None => EventCursor::empty(),
        }
    }

    /// Number of events currently stored for a type (0 for unknown types).
    #[must_use]
    pub fn len(&self, event_type: &str) -> usize {
        self.indexes
            .get(event_type)
            .map_or(0, |index| index.len())
    }

    /// True when no index holds any entry.
    ///
    /// An index emptied one entry at a time through a cursor still exists
    /// but counts as empty here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.iter().all(|entry| entry.value().is_empty())
    }

    /// Snapshot of the currently registered type names, in no particular
    /// order.
    #[must_use]
    pub fn types(&self) -> Vec<String> {
        self.indexes.iter().map(|entry| entry.key().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_creates_index_lazily() {
        let store = EventStore::new();
        assert!(store.types().is_empty());

        store.insert(Event::new("login", 1));
        assert_eq!(store.types(), vec!["login".to_owned()]);
        assert_eq!(store.len("login"), 1);
    }

    #[test]
    fn test_duplicate_timestamp_is_dropped() {
        let store = EventStore::new();
        store.insert(Event::new("login", 7));
        store.insert(Event::new("login", 7));
        assert_eq!(store.len("login"), 1);
    }

    #[test]
    fn test_same_timestamp_different_types() {
        let store = EventStore::new();
        store.insert(Event::new("login", 7));
        store.insert(Event::new("logout", 7));
        assert_eq!(store.len("login"), 1);
        assert_eq!(store.len("logout"), 1);
    }

    #[test]
    fn test_remove_all_unknown_type_is_noop() {
        let store = EventStore::new();
        store.remove_all("never-seen");
        assert!(store.is_empty());
    }

    #[test]
    fn test_len_unknown_type() {
        let store = EventStore::new();
        assert_eq!(store.len("nope"), 0);
    }

    #[test]
    fn test_is_empty_after_cursor_drains_index() {
        let store = EventStore::new();
        store.insert(Event::new("login", 1));

        let mut cursor = store.query("login", i64::MIN, i64::MAX);
        assert!(cursor.advance());
        cursor.delete().unwrap();

        // The index object survives, but the store holds no events.
        assert_eq!(store.types(), vec!["login".to_owned()]);
        assert!(store.is_empty());
    }
}
