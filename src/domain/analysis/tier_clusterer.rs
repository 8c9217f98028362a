//! Tier Clusterer - Splits a ranked list into tiers at unusually large gaps.

use serde::Serialize;
use std::ops::Range;
use tracing::debug;

/// Labels for the first eight tiers, best first.
pub const TIER_LABELS: [&str; 8] = [
    "Excellent",
    "Very Good",
    "Good",
    "Fair",
    "Moderate",
    "Weak",
    "Poor",
    "Very Poor",
];

/// Default multiple of the average gap that separates two tiers.
pub const DEFAULT_GAP_MULTIPLIER: f64 = 2.0;

/// Default population size at or below which every alternative is its own tier.
pub const DEFAULT_SINGLETON_LIMIT: usize = 3;

/// Default number of highlighted tiers.
pub const DEFAULT_PODIUM_SIZE: usize = 3;

/// Label for a 1-based tier number.
pub fn tier_label(number: u32) -> String {
    number
        .checked_sub(1)
        .and_then(|i| TIER_LABELS.get(i as usize))
        .map(|label| label.to_string())
        .unwrap_or_else(|| format!("Tier {}", number))
}

/// A contiguous run of the ranked list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tier {
    /// 1 is the best tier.
    pub number: u32,
    pub label: String,
    /// Position of the first member in the ranked list.
    pub start: usize,
    /// One past the last member.
    pub end: usize,
    pub best_score: f64,
    pub worst_score: f64,
}

impl Tier {
    fn new(number: u32, members: Range<usize>, scores: &[f64]) -> Self {
        Self {
            number,
            label: tier_label(number),
            start: members.start,
            end: members.end,
            best_score: scores[members.start],
            worst_score: scores[members.end - 1],
        }
    }

    /// Positions of the members in the ranked list.
    pub fn members(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Tiers split into the highlighted podium and the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Podium<'a> {
    pub podium: Vec<&'a Tier>,
    pub overflow: Vec<&'a Tier>,
}

/// Gap-based tier detection.
///
/// # Algorithm
/// For a population of `n` scores sorted best first:
/// - `n <= singleton_limit`: one tier per score
/// - otherwise `threshold = gap_multiplier * mean(|s[i] - s[i+1]|)` and a
///   new tier starts wherever a gap is strictly greater than the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierClusterer {
    gap_multiplier: f64,
    singleton_limit: usize,
    podium_size: usize,
}

impl Default for TierClusterer {
    fn default() -> Self {
        Self {
            gap_multiplier: DEFAULT_GAP_MULTIPLIER,
            singleton_limit: DEFAULT_SINGLETON_LIMIT,
            podium_size: DEFAULT_PODIUM_SIZE,
        }
    }
}

impl TierClusterer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap_multiplier(mut self, multiplier: f64) -> Self {
        self.gap_multiplier = multiplier;
        self
    }

    pub fn with_singleton_limit(mut self, limit: usize) -> Self {
        self.singleton_limit = limit;
        self
    }

    pub fn with_podium_size(mut self, size: usize) -> Self {
        self.podium_size = size;
        self
    }

    pub fn gap_multiplier(&self) -> f64 {
        self.gap_multiplier
    }

    pub fn podium_size(&self) -> usize {
        self.podium_size
    }

    /// Clusters scores already sorted best first.
    ///
    /// # Edge Cases
    /// - Empty input: no tiers
    /// - All scores equal: a single tier (beyond the singleton limit)
    pub fn cluster(&self, scores: &[f64]) -> Vec<Tier> {
        let n = scores.len();
        if n == 0 {
            return Vec::new();
        }

        if n <= self.singleton_limit {
            return (0..n)
                .map(|i| Tier::new(i as u32 + 1, i..i + 1, scores))
                .collect();
        }

        let gaps: Vec<f64> = scores.windows(2).map(|w| (w[0] - w[1]).abs()).collect();
        let avg_gap = gaps.iter().sum::<f64>() / gaps.len() as f64;
        let threshold = self.gap_multiplier * avg_gap;
        debug!(avg_gap, threshold, "Tier gap threshold");

        let mut tiers = Vec::new();
        let mut start = 0;
        for (i, gap) in gaps.iter().enumerate() {
            if *gap > threshold {
                tiers.push(Tier::new(tiers.len() as u32 + 1, start..i + 1, scores));
                start = i + 1;
            }
        }
        tiers.push(Tier::new(tiers.len() as u32 + 1, start..n, scores));

        debug!(tiers = tiers.len(), population = n, "Clustered into tiers");
        tiers
    }

    /// Picks the best `podium_size` tiers by best score; the rest overflow.
    pub fn podium<'a>(&self, tiers: &'a [Tier]) -> Podium<'a> {
        let mut ordered: Vec<&Tier> = tiers.iter().collect();
        ordered.sort_by(|a, b| b.best_score.total_cmp(&a.best_score));

        let cut = self.podium_size.min(ordered.len());
        let overflow = ordered.split_off(cut);
        Podium {
            podium: ordered,
            overflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sizes(tiers: &[Tier]) -> Vec<usize> {
        tiers.iter().map(Tier::len).collect()
    }

    #[test]
    fn empty_population_has_no_tiers() {
        assert!(TierClusterer::new().cluster(&[]).is_empty());
    }

    #[test]
    fn small_population_is_all_singletons() {
        let tiers = TierClusterer::new().cluster(&[9.0, 8.9, 8.8]);
        assert_eq!(sizes(&tiers), vec![1, 1, 1]);
        assert_eq!(tiers[2].number, 3);
        assert_eq!(tiers[2].label, "Good");
    }

    #[test]
    fn large_gap_splits_tiers() {
        // gaps 0.5, 0.5, 6.0, 0.5 -> avg 1.875, threshold 3.75
        let tiers = TierClusterer::new().cluster(&[10.0, 9.5, 9.0, 3.0, 2.5]);

        assert_eq!(sizes(&tiers), vec![3, 2]);
        assert_eq!(tiers[0].label, "Excellent");
        assert_eq!(tiers[1].label, "Very Good");
        assert_eq!(tiers[1].members(), 3..5);
        assert_eq!(tiers[1].best_score, 3.0);
        assert_eq!(tiers[1].worst_score, 2.5);
    }

    #[test]
    fn gap_equal_to_threshold_does_not_split() {
        // gaps 1, 1, 4 -> avg 2, threshold 4; 4 is not strictly greater
        let tiers = TierClusterer::new().cluster(&[10.0, 9.0, 8.0, 4.0]);
        assert_eq!(sizes(&tiers), vec![4]);
    }

    #[test]
    fn uniform_scores_form_one_tier() {
        let tiers = TierClusterer::new().cluster(&[5.0; 6]);
        assert_eq!(sizes(&tiers), vec![6]);
    }

    #[test]
    fn gap_multiplier_is_tunable() {
        let scores = [10.0, 9.5, 9.0, 3.0, 2.5];
        let tiers = TierClusterer::new().with_gap_multiplier(5.0).cluster(&scores);
        assert_eq!(tiers.len(), 1);

        let tiers = TierClusterer::new().with_gap_multiplier(0.2).cluster(&scores);
        assert_eq!(tiers.len(), 5);
    }

    #[test]
    fn singleton_limit_is_tunable() {
        let tiers = TierClusterer::new().with_singleton_limit(0).cluster(&[1.0, 1.0]);
        assert_eq!(tiers.len(), 1);
    }

    #[test]
    fn labels_run_out_after_eight() {
        assert_eq!(tier_label(1), "Excellent");
        assert_eq!(tier_label(8), "Very Poor");
        assert_eq!(tier_label(9), "Tier 9");
        assert_eq!(tier_label(0), "Tier 0");
    }

    #[test]
    fn podium_takes_best_tiers_and_overflows_rest() {
        let scores = [10.0, 9.9, 7.0, 6.9, 4.0, 3.9, 1.0, 0.9];
        let clusterer = TierClusterer::new();
        let tiers = clusterer.cluster(&scores);
        assert_eq!(tiers.len(), 4);

        let podium = clusterer.podium(&tiers);
        let podium_numbers: Vec<u32> = podium.podium.iter().map(|t| t.number).collect();
        let overflow_numbers: Vec<u32> = podium.overflow.iter().map(|t| t.number).collect();
        assert_eq!(podium_numbers, vec![1, 2, 3]);
        assert_eq!(overflow_numbers, vec![4]);
    }

    #[test]
    fn podium_with_fewer_tiers_than_size() {
        let clusterer = TierClusterer::new().with_podium_size(5);
        let tiers = clusterer.cluster(&[3.0, 2.0]);
        let podium = clusterer.podium(&tiers);
        assert_eq!(podium.podium.len(), 2);
        assert!(podium.overflow.is_empty());
    }

    proptest! {
        #[test]
        fn small_populations_get_one_tier_each(scores in prop::collection::vec(0.0f64..10.0, 0..=3)) {
            let mut sorted = scores.clone();
            sorted.sort_by(|a, b| b.total_cmp(a));
            prop_assert_eq!(TierClusterer::new().cluster(&sorted).len(), sorted.len());
        }

        #[test]
        fn tiers_cover_the_list_contiguously(scores in prop::collection::vec(0.0f64..10.0, 1..40)) {
            let mut sorted = scores.clone();
            sorted.sort_by(|a, b| b.total_cmp(a));
            let tiers = TierClusterer::new().cluster(&sorted);

            prop_assert_eq!(tiers[0].start, 0);
            prop_assert_eq!(tiers[tiers.len() - 1].end, sorted.len());
            for pair in tiers.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
                prop_assert!(pair[0].number < pair[1].number);
            }
        }
    }
}
