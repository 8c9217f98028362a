//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{
    ScoringPolicy, DEFAULT_DISPLAY_DECIMALS, DEFAULT_DISPLAY_SCALE, DEFAULT_GAP_MULTIPLIER,
    DEFAULT_PODIUM_SIZE, DEFAULT_SINGLETON_LIMIT,
};

/// Tuning of normalization and tier detection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoringConfig {
    /// Multiple of the average gap that starts a new tier
    #[serde(default = "default_gap_multiplier")]
    pub gap_multiplier: f64,

    /// Population size at or below which every alternative is its own tier
    #[serde(default = "default_singleton_limit")]
    pub singleton_limit: usize,

    /// Number of highlighted tiers
    #[serde(default = "default_podium_size")]
    pub podium_size: usize,

    /// Upper end of the display scale
    #[serde(default = "default_display_scale")]
    pub display_scale: f64,

    /// Decimals kept in display scores
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u32,
}

impl ScoringConfig {
    /// Domain policy built from this section
    pub fn to_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            gap_multiplier: self.gap_multiplier,
            singleton_limit: self.singleton_limit,
            podium_size: self.podium_size,
            display_scale: self.display_scale,
            display_decimals: self.display_decimals,
        }
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.gap_multiplier.is_finite() || self.gap_multiplier <= 0.0 {
            return Err(ValidationError::InvalidGapMultiplier);
        }
        if self.podium_size == 0 {
            return Err(ValidationError::InvalidPodiumSize);
        }
        if !self.display_scale.is_finite() || self.display_scale <= 0.0 {
            return Err(ValidationError::InvalidDisplayScale);
        }
        if self.display_decimals > 10 {
            return Err(ValidationError::InvalidDisplayDecimals);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            gap_multiplier: default_gap_multiplier(),
            singleton_limit: default_singleton_limit(),
            podium_size: default_podium_size(),
            display_scale: default_display_scale(),
            display_decimals: default_display_decimals(),
        }
    }
}

fn default_gap_multiplier() -> f64 {
    DEFAULT_GAP_MULTIPLIER
}

fn default_singleton_limit() -> usize {
    DEFAULT_SINGLETON_LIMIT
}

fn default_podium_size() -> usize {
    DEFAULT_PODIUM_SIZE
}

fn default_display_scale() -> f64 {
    DEFAULT_DISPLAY_SCALE
}

fn default_display_decimals() -> u32 {
    DEFAULT_DISPLAY_DECIMALS
}
