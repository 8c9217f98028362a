//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how the application publishes events without knowing
//! about the underlying transport (in-memory capture, logs, ...).

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events are delivered in the order they are published
/// - Errors are propagated to the caller
///
/// # Example
///
/// ```ignore
/// let envelope = EventEnvelope::from_event(&ranking_computed)?;
/// publisher.publish(envelope)?;
/// ```
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order, stopping at the first failure.
    fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event)?;
        }
        Ok(())
    }
}
