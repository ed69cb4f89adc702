//! Concurrent in-memory store for timestamped events.
//!
//! Events are grouped by a string type; each type owns an ordered index from
//! timestamp to event. The store supports concurrent insertion, bulk removal
//! by type, and half-open time-range queries that return a cursor
//! ([`EventCursor`]) supporting position-aware read and delete.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  EventStore                                                 │
//! │    - sharded concurrent map: type name → TypeIndex          │
//! │    - insert / remove_all / query                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TypeIndex (one per type, created on first insert)          │
//! │    - ordered map: timestamp → Event                         │
//! │    - own read-write lock, no cross-type contention          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  EventCursor (per query, [start, end) half-open range)      │
//! │    - forward-only scan, strictly ascending timestamps       │
//! │    - position-aware delete through the cursor               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Concurrency
//!
//! The store is a passive concurrent structure: no internal threads and no
//! global lock. The type table is sharded and each type index carries its
//! own lock, held only for the duration of a single map operation. Cursor
//! iteration is live rather than snapshot-isolated: a scan may or may not
//! observe entries inserted or removed concurrently, but within one cursor
//! timestamps are always yielded in strictly ascending order.
//!
//! # Example
//!
//! ```
//! use tempo_store::{Event, EventStore};
//!
//! let store = EventStore::new();
//! store.insert(Event::new("deploy", 3));
//! store.insert(Event::new("deploy", 7));
//!
//! let mut cursor = store.query("deploy", 0, 10);
//! while cursor.advance() {
//!     if let Some(event) = cursor.current()? {
//!         println!("{} @ {}", event.event_type(), event.timestamp());
//!     }
//! }
//! # Ok::<(), tempo_store::CursorError>(())
//! ```

mod cursor;
mod error;
mod event;
mod index;
mod store;

pub use cursor::EventCursor;
pub use error::{CursorError, CursorResult};
pub use event::Event;
pub use store::EventStore;
