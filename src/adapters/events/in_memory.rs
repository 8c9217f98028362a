//! In-memory event bus that records every published event.
//!
//! Delivery is synchronous and deterministic, which makes it the publisher
//! of choice in tests and for callers that inspect events after a run.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Records published events in order.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// handler.handle(cmd)?;
/// assert!(bus.has_event("ranking.computed.v1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means a writer panicked mid-push; the Vec is intact.
    fn read(&self) -> RwLockReadGuard<'_, Vec<EventEnvelope>> {
        self.published.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<EventEnvelope>> {
        self.published.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns all published events.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.read().clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.read()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.read()
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect()
    }

    /// Clears all published events.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.read().len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.read().iter().any(|e| e.event_type == event_type)
    }
}

impl EventPublisher for InMemoryEventBus {
    fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.write().push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use serde_json::json;

    fn test_envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope {
            event_type: event_type.to_string(),
            schema_version: 1,
            aggregate_id: aggregate_id.to_string(),
            occurred_at: Timestamp::now(),
            payload: json!({}),
        }
    }

    #[test]
    fn publish_stores_event() {
        let bus = InMemoryEventBus::new();
        bus.publish(test_envelope("test.event", "run-1")).unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("test.event"));
        assert!(!bus.has_event("other.event"));
    }

    #[test]
    fn events_of_type_filters_correctly() {
        let bus = InMemoryEventBus::new();
        bus.publish(test_envelope("type.a", "1")).unwrap();
        bus.publish(test_envelope("type.b", "2")).unwrap();
        bus.publish(test_envelope("type.a", "3")).unwrap();

        assert_eq!(bus.events_of_type("type.a").len(), 2);
    }

    #[test]
    fn events_for_aggregate_filters_correctly() {
        let bus = InMemoryEventBus::new();
        bus.publish(test_envelope("type.a", "run-1")).unwrap();
        bus.publish(test_envelope("type.b", "run-2")).unwrap();
        bus.publish(test_envelope("type.c", "run-1")).unwrap();

        assert_eq!(bus.events_for_aggregate("run-1").len(), 2);
    }

    #[test]
    fn publish_all_keeps_order() {
        let bus = InMemoryEventBus::new();
        bus.publish_all(vec![test_envelope("first", "r"), test_envelope("second", "r")])
            .unwrap();

        let types: Vec<String> = bus.published_events().into_iter().map(|e| e.event_type).collect();
        assert_eq!(types, vec!["first", "second"]);
    }

    #[test]
    fn clear_removes_events() {
        let bus = InMemoryEventBus::new();
        bus.publish(test_envelope("test.event", "r")).unwrap();
        bus.clear();
        assert_eq!(bus.event_count(), 0);
    }
}
