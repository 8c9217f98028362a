//! Analysis Module - Pure domain services for ranking alternatives.
//!
//! # Components
//!
//! - `ColumnResolver` - Maps table headers to matrix fields via an alias table
//! - `DecisionMatrix` - Strongly-typed rows built from a `RawTable`
//! - `RankingEngine` - Weighted score and uncertainty per alternative
//! - `ScoreNormalizer` - Min/max mapping onto the display scale
//! - `TierClusterer` - Gap-based tiers and podium selection
//! - `RankingPipeline` - All of the above in one pass, producing a `RankingReport`
//!
//! Everything here is synchronous and side-effect free apart from logging.
//! The same table and weights always produce the same report.

mod column_resolver;
mod decision_matrix;
mod events;
mod ranking_engine;
mod report;
mod score_normalizer;
mod tier_clusterer;

pub use column_resolver::{
    normalize_header, ColumnAliases, ColumnMap, ColumnResolver, MatrixError, MatrixField,
};
pub use decision_matrix::{parse_number, AlternativeRow, DecisionMatrix, RawTable};
pub use events::RankingComputed;
pub use ranking_engine::{AlternativeScore, RankingEngine};
pub use report::{RankedAlternative, RankingPipeline, RankingReport, ScoringPolicy, TierSummary};
pub use score_normalizer::{
    rank_order, ScoreNormalizer, DEFAULT_DISPLAY_DECIMALS, DEFAULT_DISPLAY_SCALE,
};
pub use tier_clusterer::{
    tier_label, Podium, Tier, TierClusterer, DEFAULT_GAP_MULTIPLIER, DEFAULT_PODIUM_SIZE,
    DEFAULT_SINGLETON_LIMIT, TIER_LABELS,
};
