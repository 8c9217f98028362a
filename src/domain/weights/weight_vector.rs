//! Validated fractional priority weights.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::Channel;
use crate::domain::foundation::ValidationError;

/// Allowed absolute deviation of the weight sum from 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Floor applied to a weight sum before dividing by it.
pub const MIN_WEIGHT_SUM: f64 = 1e-12;

/// Priority weights for cost, quality and schedule.
///
/// Always fractional: every component lies in [0, 1] and the three sum to 1
/// within [`WEIGHT_SUM_TOLERANCE`]. Percent input is converted at the boundary
/// (see [`super::PercentSplit::to_weights`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightVector {
    cost: f64,
    quality: f64,
    schedule: f64,
}

impl<'de> Deserialize<'de> for WeightVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            cost: f64,
            quality: f64,
            schedule: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        WeightVector::try_new(raw.cost, raw.quality, raw.schedule).map_err(serde::de::Error::custom)
    }
}

impl WeightVector {
    /// Creates a weight vector, rejecting components outside [0, 1] or a sum
    /// that is not 1.
    pub fn try_new(cost: f64, quality: f64, schedule: f64) -> Result<Self, ValidationError> {
        for (channel, value) in [
            (Channel::Cost, cost),
            (Channel::Quality, quality),
            (Channel::Schedule, schedule),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::out_of_range(channel.label(), 0.0, 1.0, value));
            }
        }

        let sum = cost + quality + schedule;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::out_of_range("weight sum", 1.0, 1.0, sum));
        }

        Ok(Self {
            cost,
            quality,
            schedule,
        })
    }

    /// Builds a weight vector from arbitrary non-negative magnitudes by
    /// dividing each by their sum.
    ///
    /// Negative or non-finite components count as zero. An all-zero input
    /// yields an all-zero result, which fails validation.
    pub fn normalized(cost: f64, quality: f64, schedule: f64) -> Result<Self, ValidationError> {
        let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let (c, q, s) = (clean(cost), clean(quality), clean(schedule));
        let sum = (c + q + s).max(MIN_WEIGHT_SUM);
        Self::try_new(c / sum, q / sum, s / sum)
    }

    /// Equal weight on every channel.
    pub fn balanced() -> Self {
        Self {
            cost: 1.0 / 3.0,
            quality: 1.0 / 3.0,
            schedule: 1.0 / 3.0,
        }
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    pub fn schedule(&self) -> f64 {
        self.schedule
    }

    /// Returns the weight of one channel.
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Cost => self.cost,
            Channel::Quality => self.quality,
            Channel::Schedule => self.schedule,
        }
    }

    /// Components in canonical (cost, quality, schedule) order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.cost, self.quality, self.schedule]
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cost={:.4} quality={:.4} schedule={:.4}",
            self.cost, self.quality, self.schedule
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_valid_vector() {
        let w = WeightVector::try_new(0.5, 0.3, 0.2).unwrap();
        assert_eq!(w.cost(), 0.5);
        assert_eq!(w.quality(), 0.3);
        assert_eq!(w.schedule(), 0.2);
    }

    #[test]
    fn try_new_rejects_negative_component() {
        let err = WeightVector::try_new(-0.1, 0.6, 0.5).unwrap_err();
        match err {
            ValidationError::OutOfRange { field, .. } => assert_eq!(field, "cost"),
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn try_new_rejects_bad_sum() {
        assert!(WeightVector::try_new(0.5, 0.5, 0.5).is_err());
        assert!(WeightVector::try_new(0.2, 0.2, 0.2).is_err());
    }

    #[test]
    fn try_new_tolerates_rounding() {
        assert!(WeightVector::try_new(0.3333333, 0.3333333, 0.3333334).is_ok());
    }

    #[test]
    fn normalized_divides_by_sum() {
        let w = WeightVector::normalized(2.0, 1.0, 1.0).unwrap();
        assert!((w.cost() - 0.5).abs() < 1e-12);
        assert!((w.quality() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn normalized_treats_negatives_as_zero() {
        let w = WeightVector::normalized(-0.00001, 0.5, 0.5).unwrap();
        assert_eq!(w.cost(), 0.0);
        assert!((w.quality() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn normalized_rejects_all_zero() {
        assert!(WeightVector::normalized(0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn get_matches_named_accessors() {
        let w = WeightVector::try_new(0.1, 0.2, 0.7).unwrap();
        assert_eq!(w.get(Channel::Cost), w.cost());
        assert_eq!(w.get(Channel::Quality), w.quality());
        assert_eq!(w.get(Channel::Schedule), w.schedule());
    }

    #[test]
    fn deserialization_validates() {
        let ok: WeightVector =
            serde_json::from_str(r#"{"cost":0.5,"quality":0.3,"schedule":0.2}"#).unwrap();
        assert_eq!(ok.quality(), 0.3);

        let bad = serde_json::from_str::<WeightVector>(r#"{"cost":50,"quality":30,"schedule":20}"#);
        assert!(bad.is_err());
    }
}
