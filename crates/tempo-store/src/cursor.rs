//! Forward cursor over a time range of one type index.

use std::ops::Bound;
use std::sync::Arc;

use crate::error::{CursorError, CursorResult};
use crate::event::Event;
use crate::index::TypeIndex;

/// Scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// `advance` has not been called yet.
    NotStarted,
    /// Positioned on a key previously yielded by `advance`.
    At(i64),
    /// A previous `advance` ran out of keys. Terminal.
    Exhausted,
}

/// Forward-only cursor over events of one type within `[start, end)`.
///
/// The cursor reads through to the live index on every step rather than
/// materializing the range up front: entries inserted or removed while the
/// scan is in flight may or may not be observed, depending on where the
/// cursor stands when they land. Within one cursor, yielded timestamps are
/// strictly ascending.
///
/// Deleting the entry under the cursor does not move the cursor; the
/// position stays valid and [`current`](Self::current) reports the entry as
/// absent until the next [`advance`](Self::advance).
#[derive(Debug)]
pub struct EventCursor {
    index: Option<Arc<TypeIndex>>,
    start: i64,
    end: i64,
    position: Position,
}

impl EventCursor {
    pub(crate) fn new(index: Arc<TypeIndex>, start: i64, end: i64) -> Self {
        Self {
            index: Some(index),
            start,
            end,
            position: Position::NotStarted,
        }
    }

    /// A cursor over nothing, as returned by queries for unknown types.
    pub(crate) fn empty() -> Self {
        Self {
            index: None,
            start: 0,
            end: 0,
            position: Position::NotStarted,
        }
    }

    /// Move to the next event in ascending timestamp order.
    ///
    /// Returns true and positions the cursor when an unvisited key remains
    /// in range; returns false once the range is exhausted, and keeps
    /// returning false on further calls.
    pub fn advance(&mut self) -> bool {
        let lower = match self.position {
            Position::NotStarted => Bound::Included(self.start),
            Position::At(key) => Bound::Excluded(key),
            Position::Exhausted => return false,
        };

        let next = self
            .index
            .as_ref()
            .and_then(|index| index.next_key(lower, self.end));

        match next {
            Some(key) => {
                self.position = Position::At(key);
                true
            }
            None => {
                self.position = Position::Exhausted;
                false
            }
        }
    }

    /// The event at the cursor's position, looked up fresh from the live
    /// index.
    ///
    /// Returns `Ok(None)` when the entry at the position has been removed
    /// since the last `advance` — by this cursor's own
    /// [`delete`](Self::delete) or by a concurrent removal. The position
    /// itself is still valid; only the entry is gone.
    ///
    /// # Errors
    ///
    /// [`CursorError::NotPositioned`] before the first `advance`, after
    /// exhaustion, or after [`close`](Self::close).
    pub fn current(&self) -> CursorResult<Option<Arc<Event>>> {
        let (index, key) = self.positioned()?;
        Ok(index.get(key))
    }

    /// Remove the entry at the cursor's position from the store.
    ///
    /// The cursor does not move: `current` afterwards reports the entry as
    /// absent, and the next `advance` continues from the same position.
    /// Deleting an entry that is already gone is a no-op.
    ///
    /// # Errors
    ///
    /// [`CursorError::NotPositioned`] before the first `advance`, after
    /// exhaustion, or after [`close`](Self::close).
    pub fn delete(&mut self) -> CursorResult<()> {
        let (index, key) = self.positioned()?;
        index.remove(key);
        Ok(())
    }

    /// Release the cursor's view of the index.
    ///
    /// The cursor holds no external resources, so calling this is optional;
    /// dropping the cursor releases the index reference just the same. Safe
    /// to call repeatedly. A closed cursor behaves like an empty one.
    pub fn close(&mut self) {
        self.index = None;
        self.position = Position::Exhausted;
    }

    fn positioned(&self) -> CursorResult<(&TypeIndex, i64)> {
        match (self.position, self.index.as_deref()) {
            (Position::At(key), Some(index)) => Ok((index, key)),
            _ => Err(CursorError::NotPositioned),
        }
    }
}
