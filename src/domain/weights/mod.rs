//! Weights module - Priority weights and how users arrive at them.
//!
//! # Components
//!
//! - `Channel` - The cost / quality / schedule dimensions
//! - `WeightVector` - Validated fractional weights, the only form the
//!   ranking engine accepts
//! - `PercentSplit` - Editable percent form with proportional rebalancing
//! - `PrioritySession` - Per-user selection state (triangle clicks, typed
//!   edits, confirmation)

mod channel;
mod percent_split;
mod session;
mod weight_vector;

pub use channel::Channel;
pub use percent_split::{PercentSplit, WeightError, PERCENT_SUM_TOLERANCE};
pub use session::{ClickOutcome, PrioritySession};
pub use weight_vector::{WeightVector, MIN_WEIGHT_SUM, WEIGHT_SUM_TOLERANCE};

use crate::domain::foundation::{DomainError, ErrorCode};

impl From<WeightError> for DomainError {
    fn from(err: WeightError) -> Self {
        match err {
            WeightError::NoPriorities => DomainError::new(ErrorCode::NoPriorities, err.to_string()),
            WeightError::Invalid(inner) => inner.into(),
        }
    }
}
