//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableSource` - Supplies the raw decision table for a scoring pass
//! - `EventPublisher` - Publishes domain events such as `RankingComputed`

mod event_publisher;
mod table_source;

pub use event_publisher::EventPublisher;
pub use table_source::{TableSource, TableSourceError};
