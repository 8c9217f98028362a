//! Event publisher that writes events to the log.

use tracing::info;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Emits every event as an `info` record with its payload as JSON text.
///
/// Used by the command-line runner, where no event consumer exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl EventPublisher for TracingEventPublisher {
    fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        info!(
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            occurred_at = %event.occurred_at,
            payload = %event.payload,
            "Domain event"
        );
        Ok(())
    }
}
