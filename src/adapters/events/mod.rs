//! Event publishing adapters.
//!
//! - `InMemoryEventBus` - Records events for inspection (tests, embedding callers)
//! - `TracingEventPublisher` - Writes events to the log

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventBus;
pub use tracing_publisher::TracingEventPublisher;
