//! Domain event contract and transport envelope.
//!
//! - `DomainEvent` - Trait every domain event implements
//! - `domain_event!` - Macro that implements it from field names
//! - `EventEnvelope` - Serialized form handed to whoever consumes events

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::Timestamp;

/// Contract for identification, routing and versioning of events.
pub trait DomainEvent: Send + Sync {
    /// Event type string with version suffix, e.g. `"ranking.computed.v1"`.
    fn event_type(&self) -> &'static str;

    /// Schema version; matches the suffix of `event_type`.
    fn schema_version(&self) -> u32;

    /// Id of the run or aggregate that emitted the event.
    fn aggregate_id(&self) -> String;

    fn occurred_at(&self) -> Timestamp;
}

/// Implements [`DomainEvent`] by naming the struct's fields.
///
/// ```ignore
/// domain_event!(
///     RankingComputed,
///     event_type = "ranking.computed.v1",
///     schema_version = 1,
///     aggregate_id = run_id,
///     occurred_at = computed_at
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        schema_version = $schema_version:expr,
        aggregate_id = $agg_id_field:ident,
        occurred_at = $occurred_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn schema_version(&self) -> u32 {
                $schema_version
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }
        }
    };
}

pub use domain_event;

/// Transport wrapper carrying an event's routing data and JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_type: String,
    pub schema_version: u32,
    pub aggregate_id: String,
    pub occurred_at: Timestamp,
    pub payload: JsonValue,
}

impl EventEnvelope {
    /// Wraps a serializable event.
    pub fn from_event<T>(event: &T) -> Result<Self, serde_json::Error>
    where
        T: DomainEvent + Serialize,
    {
        Ok(Self {
            event_type: event.event_type().to_string(),
            schema_version: event.schema_version(),
            aggregate_id: event.aggregate_id(),
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(event)?,
        })
    }

    /// Deserializes the payload back into a concrete event type.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
