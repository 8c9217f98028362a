//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event plumbing and error types that
//! form the vocabulary of the priority triangle domain.

mod errors;
mod events;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope};
pub use ids::RunId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
