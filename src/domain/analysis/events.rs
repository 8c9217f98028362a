//! Analysis domain events.

use serde::{Deserialize, Serialize};

use super::RankingReport;
use crate::domain::foundation::{domain_event, RunId, Timestamp};
use crate::domain::weights::WeightVector;

/// Published once per confirmed scoring pass.
///
/// Carries a summary of the report rather than every alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingComputed {
    pub run_id: RunId,
    /// Weights the pass was run with.
    pub weights: WeightVector,
    pub alternative_count: usize,
    pub tier_count: usize,
    /// Id of the top-ranked alternative (None for an empty table).
    pub best_alternative_id: Option<String>,
    /// Ids in podium tiers, in rank order.
    pub podium_ids: Vec<String>,
    pub computed_at: Timestamp,
}

domain_event!(
    RankingComputed,
    event_type = "ranking.computed.v1",
    schema_version = 1,
    aggregate_id = run_id,
    occurred_at = computed_at
);

impl RankingComputed {
    /// Summarizes a report.
    pub fn from_report(run_id: RunId, report: &RankingReport, computed_at: Timestamp) -> Self {
        Self {
            run_id,
            weights: report.weights,
            alternative_count: report.alternatives.len(),
            tier_count: report.tiers.len(),
            best_alternative_id: report.best().map(|a| a.id.clone()),
            podium_ids: report.podium_alternatives().map(|a| a.id.clone()).collect(),
            computed_at,
        }
    }
}
