//! Ranking Report - One complete scoring pass over a decision matrix.

use serde::Serialize;
use tracing::{info, warn};

use super::{
    rank_order, ColumnResolver, DecisionMatrix, MatrixError, RankingEngine, RawTable,
    ScoreNormalizer, TierClusterer, DEFAULT_DISPLAY_DECIMALS, DEFAULT_DISPLAY_SCALE,
    DEFAULT_GAP_MULTIPLIER, DEFAULT_PODIUM_SIZE, DEFAULT_SINGLETON_LIMIT,
};
use crate::domain::coordinate::{Coordinate, CoordinateTree, TreeEntry};
use crate::domain::weights::WeightVector;

/// Tunable parameters of a scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringPolicy {
    pub gap_multiplier: f64,
    pub singleton_limit: usize,
    pub podium_size: usize,
    pub display_scale: f64,
    pub display_decimals: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            gap_multiplier: DEFAULT_GAP_MULTIPLIER,
            singleton_limit: DEFAULT_SINGLETON_LIMIT,
            podium_size: DEFAULT_PODIUM_SIZE,
            display_scale: DEFAULT_DISPLAY_SCALE,
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
        }
    }
}

impl ScoringPolicy {
    pub fn normalizer(&self) -> ScoreNormalizer {
        ScoreNormalizer::new(self.display_scale, self.display_decimals)
    }

    pub fn clusterer(&self) -> TierClusterer {
        TierClusterer::new()
            .with_gap_multiplier(self.gap_multiplier)
            .with_singleton_limit(self.singleton_limit)
            .with_podium_size(self.podium_size)
    }
}

/// One alternative after scoring, normalization and tiering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Position in the source table, 0-based.
    pub row_index: usize,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<String>,
    pub ranking_score: f64,
    pub uncertainty: f64,
    pub display_score: f64,
    pub tier: u32,
    pub tier_label: String,
}

/// A tier with its member ids, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierSummary {
    pub number: u32,
    pub label: String,
    pub best_score: f64,
    pub worst_score: f64,
    pub members: Vec<String>,
}

/// Read-only result of a scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub weights: WeightVector,
    /// Alternatives from best to worst.
    pub alternatives: Vec<RankedAlternative>,
    pub tiers: Vec<TierSummary>,
    /// Tier numbers on the podium, best first.
    pub podium: Vec<u32>,
    /// Tier numbers outside the podium.
    pub overflow: Vec<u32>,
    pub tree: CoordinateTree,
}

impl RankingReport {
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// The best-ranked alternative, if any.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.alternatives.first()
    }

    pub fn tier(&self, number: u32) -> Option<&TierSummary> {
        self.tiers.iter().find(|t| t.number == number)
    }

    /// Alternatives belonging to podium tiers, in rank order.
    pub fn podium_alternatives(&self) -> impl Iterator<Item = &RankedAlternative> {
        self.alternatives
            .iter()
            .filter(move |a| self.podium.contains(&a.tier))
    }
}

/// Runs column resolution, scoring, normalization, tiering and grouping.
#[derive(Debug, Clone, Default)]
pub struct RankingPipeline {
    resolver: ColumnResolver,
    policy: ScoringPolicy,
}

impl RankingPipeline {
    pub fn new(resolver: ColumnResolver, policy: ScoringPolicy) -> Self {
        Self { resolver, policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Ranks a raw table.
    ///
    /// # Errors
    /// Column resolution errors; nothing is scored when one occurs.
    pub fn run(&self, table: &RawTable, weights: &WeightVector) -> Result<RankingReport, MatrixError> {
        let matrix = DecisionMatrix::from_table(table, &self.resolver)?;
        Ok(self.rank(&matrix, weights))
    }

    /// Ranks an already-resolved matrix.
    pub fn rank(&self, matrix: &DecisionMatrix, weights: &WeightVector) -> RankingReport {
        let scores = RankingEngine::score_all(matrix, weights);
        let ranking: Vec<f64> = scores.iter().map(|s| s.ranking_score).collect();
        let normalizer = self.policy.normalizer();
        let display = normalizer.display_values(&ranking);
        let order = rank_order(&ranking);

        // tiers are cut on unrounded values; rounding is for output only
        let ordered_display: Vec<f64> = order.iter().map(|i| display[*i]).collect();
        let clusterer = self.policy.clusterer();
        let tiers = clusterer.cluster(&ordered_display);

        let mut alternatives = Vec::with_capacity(order.len());
        for tier in &tiers {
            for position in tier.members() {
                let index = order[position];
                let row = &matrix.rows[index];
                alternatives.push(RankedAlternative {
                    rank: position + 1,
                    row_index: row.index,
                    id: row.id.clone(),
                    name: row.name.clone(),
                    coordinate: row.coordinate.clone(),
                    ranking_score: scores[index].ranking_score,
                    uncertainty: scores[index].uncertainty,
                    display_score: normalizer.round(display[index]),
                    tier: tier.number,
                    tier_label: tier.label.clone(),
                });
            }
        }

        let tier_summaries = tiers
            .iter()
            .map(|tier| TierSummary {
                number: tier.number,
                label: tier.label.clone(),
                best_score: normalizer.round(tier.best_score),
                worst_score: normalizer.round(tier.worst_score),
                members: tier.members().map(|p| alternatives[p].id.clone()).collect(),
            })
            .collect();

        let split = clusterer.podium(&tiers);
        let podium = split.podium.iter().map(|t| t.number).collect();
        let overflow = split.overflow.iter().map(|t| t.number).collect();

        let tree = CoordinateTree::build(alternatives.iter().filter_map(tree_entry));

        info!(
            alternatives = alternatives.len(),
            tiers = tiers.len(),
            placed = tree.len(),
            "Ranking pass complete"
        );

        RankingReport {
            weights: *weights,
            alternatives,
            tiers: tier_summaries,
            podium,
            overflow,
            tree,
        }
    }
}

fn tree_entry(alternative: &RankedAlternative) -> Option<TreeEntry> {
    let text = alternative.coordinate.as_deref()?;
    match text.parse::<Coordinate>() {
        Ok(coordinate) => Some(TreeEntry {
            coordinate,
            id: alternative.id.clone(),
            ranking_score: alternative.ranking_score,
            display_score: alternative.display_score,
            tier: alternative.tier,
        }),
        Err(err) => {
            warn!(id = %alternative.id, coordinate = %text, error = %err, "Unparsable coordinate, leaving out of tree");
            None
        }
    }
}
