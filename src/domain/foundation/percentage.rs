//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new Percentage, clamping to valid range.
    ///
    /// NaN becomes zero; infinities clamp to the nearest bound.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("percentage", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Creates a Percentage from a fraction (0.0 to 1.0), clamping.
    pub fn from_fraction(fraction: f64) -> Self {
        Self::new(fraction * 100.0)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Percentage {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(pct: Percentage) -> Self {
        pct.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
