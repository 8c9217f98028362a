//! Score Normalizer - Maps ranking scores onto a 0-10 display scale.

use std::cmp::Ordering;

/// Default upper end of the display scale.
pub const DEFAULT_DISPLAY_SCALE: f64 = 10.0;

/// Default number of decimals kept in display scores.
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 2;

/// Min/max normalization over a scored population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreNormalizer {
    scale: f64,
    decimals: u32,
}

impl Default for ScoreNormalizer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_DISPLAY_SCALE,
            decimals: DEFAULT_DISPLAY_DECIMALS,
        }
    }
}

impl ScoreNormalizer {
    pub fn new(scale: f64, decimals: u32) -> Self {
        Self { scale, decimals }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Unrounded display score for `score` within `[min, max]`.
    ///
    /// When the population has no spread every score sits at the midpoint.
    /// Differences are taken on halved values so that `max - min` stays
    /// finite for any finite inputs.
    pub fn to_display_score(&self, score: f64, min: f64, max: f64) -> f64 {
        let half_range = max / 2.0 - min / 2.0;
        if half_range == 0.0 {
            return self.scale / 2.0;
        }
        ((score / 2.0 - min / 2.0) / half_range * self.scale).clamp(0.0, self.scale)
    }

    /// Rounds half away from zero to the configured decimals.
    pub fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.decimals as i32);
        (value * factor).round() / factor
    }

    /// Unrounded display scores, in input order.
    ///
    /// # Edge Cases
    /// - Empty input: empty output
    /// - All scores equal: every display score is exactly half the scale
    pub fn display_values(&self, scores: &[f64]) -> Vec<f64> {
        let Some((min, max)) = bounds(scores) else {
            return Vec::new();
        };
        scores
            .iter()
            .map(|s| self.to_display_score(*s, min, max))
            .collect()
    }

    /// Rounded display scores, in input order.
    pub fn normalize(&self, scores: &[f64]) -> Vec<f64> {
        self.display_values(scores)
            .into_iter()
            .map(|d| self.round(d))
            .collect()
    }
}

fn bounds(scores: &[f64]) -> Option<(f64, f64)> {
    let first = *scores.first()?;
    Some(
        scores
            .iter()
            .fold((first, first), |(lo, hi), s| (lo.min(*s), hi.max(*s))),
    )
}

/// Indices of `scores` from best to worst.
///
/// Sorts by the unrounded score, descending; equal scores keep input order.
pub fn rank_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|a, b| {
        scores[*b]
            .partial_cmp(&scores[*a])
            .unwrap_or(Ordering::Equal)
    });
    order
}
