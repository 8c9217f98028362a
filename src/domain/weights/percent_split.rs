//! Editable percent form of the priority weights.
//!
//! This is the representation a user types into: three percentages that are
//! kept summing to 100 by proportional rebalancing. It is converted into a
//! fractional [`WeightVector`] only when the user confirms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Channel, WeightVector, MIN_WEIGHT_SUM};
use crate::domain::foundation::{Percentage, ValidationError};

/// Allowed absolute deviation of a percent total from 100.
pub const PERCENT_SUM_TOLERANCE: f64 = 0.01;

/// Drift below which rebalancing skips the correction step.
const DRIFT_EPSILON: f64 = 1e-9;

/// Errors raised when turning a percent split into weights.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("No priorities selected: every channel is at 0%")]
    NoPriorities,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Three percentages for cost, quality and schedule.
///
/// A split produced by [`PercentSplit::rebalance`] or
/// [`PercentSplit::from_weights`] sums to 100 within 0.001. The cleared split
/// (all zero) is the neutral state after an out-of-triangle selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentSplit {
    cost: Percentage,
    quality: Percentage,
    schedule: Percentage,
}

impl PercentSplit {
    /// Equal thirds.
    pub fn even() -> Self {
        let third = Percentage::new(100.0 / 3.0);
        Self {
            cost: third,
            quality: third,
            schedule: third,
        }
    }

    /// The neutral, all-zero split.
    pub fn cleared() -> Self {
        Self {
            cost: Percentage::ZERO,
            quality: Percentage::ZERO,
            schedule: Percentage::ZERO,
        }
    }

    /// Builds a split from raw field values, clamping each to [0, 100].
    ///
    /// The result is not rebalanced; its total may differ from 100.
    pub fn from_raw(cost: f64, quality: f64, schedule: f64) -> Self {
        Self {
            cost: Percentage::new(cost),
            quality: Percentage::new(quality),
            schedule: Percentage::new(schedule),
        }
    }

    /// Percent form of a fractional weight vector.
    pub fn from_weights(weights: &WeightVector) -> Self {
        Self {
            cost: Percentage::from_fraction(weights.cost()),
            quality: Percentage::from_fraction(weights.quality()),
            schedule: Percentage::from_fraction(weights.schedule()),
        }
    }

    pub fn cost(&self) -> Percentage {
        self.cost
    }

    pub fn quality(&self) -> Percentage {
        self.quality
    }

    pub fn schedule(&self) -> Percentage {
        self.schedule
    }

    /// Returns the percentage of one channel.
    pub fn get(&self, channel: Channel) -> Percentage {
        match channel {
            Channel::Cost => self.cost,
            Channel::Quality => self.quality,
            Channel::Schedule => self.schedule,
        }
    }

    /// Sum of the three percentages.
    pub fn total(&self) -> f64 {
        self.cost.value() + self.quality.value() + self.schedule.value()
    }

    /// True when every channel is at zero.
    pub fn is_cleared(&self) -> bool {
        self.total() <= 0.0
    }

    /// Sets `channel` to `value` and scales the other two so the split sums
    /// to 100.
    ///
    /// The current values are first normalized to a total of 100. The two
    /// untouched channels share `100 - value` in proportion to their current
    /// sizes, or evenly when both are zero. Any residual drift is absorbed by
    /// the untouched channels only; the edited channel keeps exactly
    /// `value` (after clamping to [0, 100]).
    pub fn rebalance(&self, channel: Channel, value: f64) -> Self {
        let current = self.normalized_values();
        let target = Percentage::new(value).value();
        let remaining = 100.0 - target;

        let [a, b] = channel.others();
        let (mut va, mut vb) = (current[a.index()], current[b.index()]);
        let others = va + vb;

        if others > 0.0 {
            let k = remaining / others;
            va *= k;
            vb *= k;
        } else {
            va = remaining / 2.0;
            vb = remaining / 2.0;
        }

        let drift = target + va + vb - 100.0;
        let others = va + vb;
        if drift.abs() > DRIFT_EPSILON && others > 0.0 {
            let k = remaining / others;
            va *= k;
            vb *= k;
        }

        let mut values = [0.0; 3];
        values[channel.index()] = target;
        values[a.index()] = va;
        values[b.index()] = vb;
        Self::from_raw(values[0], values[1], values[2])
    }

    /// Converts to a fractional weight vector.
    ///
    /// Percentages are divided by 100 and the result renormalized to absorb
    /// rounding. A cleared split cannot be confirmed, and a split whose total
    /// is further than [`PERCENT_SUM_TOLERANCE`] from 100 is rejected.
    pub fn to_weights(&self) -> Result<WeightVector, WeightError> {
        let total = self.total();
        if total <= MIN_WEIGHT_SUM {
            return Err(WeightError::NoPriorities);
        }
        if (total - 100.0).abs() > PERCENT_SUM_TOLERANCE {
            return Err(ValidationError::out_of_range("percent total", 100.0, 100.0, total).into());
        }

        Ok(WeightVector::normalized(
            self.cost.as_fraction(),
            self.quality.as_fraction(),
            self.schedule.as_fraction(),
        )?)
    }

    fn normalized_values(&self) -> [f64; 3] {
        let total = self.total();
        if total <= MIN_WEIGHT_SUM {
            return [0.0; 3];
        }
        [
            self.cost.value() / total * 100.0,
            self.quality.value() / total * 100.0,
            self.schedule.value() / total * 100.0,
        ]
    }
}

impl Default for PercentSplit {
    fn default() -> Self {
        Self::even()
    }
}
