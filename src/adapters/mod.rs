//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `table` - Table sources (delimited files, in-memory)
//! - `events` - Event publishers (in-memory capture, log output)

pub mod events;
pub mod table;

pub use events::{InMemoryEventBus, TracingEventPublisher};
pub use table::{DelimitedTableParser, FileTableSource, InMemoryTableSource};
