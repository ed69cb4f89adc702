//! The event value type.

/// An immutable timestamped event.
///
/// Two events are distinct records if either field differs. The store never
/// clones an event after insertion; it is shared behind an
/// [`Arc`](std::sync::Arc), so stored identity is by reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    event_type: String,
    timestamp: i64,
}

impl Event {
    /// Create a new event.
    ///
    /// The type name is expected to be non-empty but is not validated.
    #[must_use]
    pub fn new(event_type: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
        }
    }

    /// The type name grouping this event.
    #[must_use]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The event timestamp. Arbitrary sign and range.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
