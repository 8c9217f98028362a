//! Ranking Engine - Weighted score and propagated uncertainty per alternative.

use serde::{Deserialize, Serialize};

use super::{AlternativeRow, DecisionMatrix};
use crate::domain::weights::WeightVector;

/// Score of one alternative under a weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    /// Higher is better.
    pub ranking_score: f64,
    /// Standard error of the ranking score.
    pub uncertainty: f64,
}

/// Stateless scoring functions.
pub struct RankingEngine;

impl RankingEngine {
    /// Scores one alternative.
    ///
    /// # Algorithm
    /// Cost and schedule Z-scores count against an alternative, quality for it:
    ///
    /// `score = -w.cost * z_cost + w.quality * z_quality - w.schedule * z_schedule`
    ///
    /// The uncertainty assumes independent errors:
    ///
    /// `sqrt((w.cost * s_cost)^2 + (w.quality * s_quality)^2 + (w.schedule * s_schedule)^2)`
    ///
    /// computed with `hypot`, so large errors do not overflow the squares.
    pub fn score(row: &AlternativeRow, weights: &WeightVector) -> AlternativeScore {
        let ranking_score = -weights.cost() * row.z_cost + weights.quality() * row.z_quality
            - weights.schedule() * row.z_schedule;

        let uncertainty = (weights.cost() * row.s_cost)
            .hypot(weights.quality() * row.s_quality)
            .hypot(weights.schedule() * row.s_schedule);

        AlternativeScore {
            ranking_score,
            uncertainty,
        }
    }

    /// Scores every row, preserving row order.
    pub fn score_all(matrix: &DecisionMatrix, weights: &WeightVector) -> Vec<AlternativeScore> {
        matrix.rows.iter().map(|row| Self::score(row, weights)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn weights(cost: f64, quality: f64, schedule: f64) -> WeightVector {
        WeightVector::try_new(cost, quality, schedule).unwrap()
    }

    #[test]
    fn cost_and_schedule_penalize_quality_rewards() {
        let row = AlternativeRow::new(0, "a").with_z(2.0, 1.0, 1.0);

        let score = RankingEngine::score(&row, &weights(0.5, 0.3, 0.2));
        assert!((score.ranking_score - (-1.0 + 0.3 - 0.2)).abs() < 1e-12);
    }

    #[test]
    fn single_channel_weight_reads_one_column() {
        let row = AlternativeRow::new(0, "a").with_z(5.0, -7.0, 3.0);

        assert_eq!(RankingEngine::score(&row, &weights(0.0, 1.0, 0.0)).ranking_score, -7.0);
        assert_eq!(RankingEngine::score(&row, &weights(1.0, 0.0, 0.0)).ranking_score, -5.0);
    }

    #[test]
    fn uncertainty_combines_errors_in_quadrature() {
        let row = AlternativeRow::new(0, "a").with_errors(0.6, 0.8, 0.0);

        let score = RankingEngine::score(&row, &weights(0.5, 0.5, 0.0));
        assert!((score.uncertainty - 0.5).abs() < 1e-12);
    }

    #[test]
    fn large_errors_do_not_overflow_uncertainty() {
        let row = AlternativeRow::new(0, "a").with_errors(1e200, 0.0, 0.0);

        let score = RankingEngine::score(&row, &weights(1.0, 0.0, 0.0));
        assert!(score.uncertainty.is_finite());
        assert!((score.uncertainty / 1e200 - 1.0).abs() < 1e-12);

        let row = AlternativeRow::new(0, "b").with_errors(3e200, 4e200, 0.0);
        let score = RankingEngine::score(&row, &weights(0.5, 0.5, 0.0));
        assert!((score.uncertainty / 2.5e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_errors_give_zero_uncertainty() {
        let row = AlternativeRow::new(0, "a").with_z(1.0, 1.0, 1.0);
        assert_eq!(RankingEngine::score(&row, &WeightVector::balanced()).uncertainty, 0.0);
    }

    #[test]
    fn score_all_preserves_row_order() {
        let matrix = DecisionMatrix::new(vec![
            AlternativeRow::new(0, "a").with_z(1.0, 0.0, 0.0),
            AlternativeRow::new(1, "b").with_z(3.0, 0.0, 0.0),
        ]);

        let scores = RankingEngine::score_all(&matrix, &weights(1.0, 0.0, 0.0));
        assert_eq!(scores[0].ranking_score, -1.0);
        assert_eq!(scores[1].ranking_score, -3.0);
    }

    #[test]
    fn empty_matrix_scores_nothing() {
        assert!(RankingEngine::score_all(&DecisionMatrix::default(), &WeightVector::balanced()).is_empty());
    }

    proptest! {
        #[test]
        fn scoring_is_deterministic(
            z in prop::array::uniform3(-10.0f64..10.0),
            s in prop::array::uniform3(0.0f64..2.0),
            w in prop::array::uniform3(0.01f64..1.0),
        ) {
            let weights = WeightVector::normalized(w[0], w[1], w[2]).unwrap();
            let row = AlternativeRow::new(0, "a")
                .with_z(z[0], z[1], z[2])
                .with_errors(s[0], s[1], s[2]);

            let first = RankingEngine::score(&row, &weights);
            let second = RankingEngine::score(&row, &weights);
            prop_assert_eq!(first, second);
            prop_assert!(first.uncertainty >= 0.0);
        }
    }
}
