//! RankAlternativesHandler - Command handler for ranking a table under
//! confirmed priority weights.
//!
//! Loads the table through the `TableSource` port, runs the ranking
//! pipeline, then publishes a `RankingComputed` summary event.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::{MatrixError, RankingComputed, RankingPipeline, RankingReport};
use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, RunId, Timestamp};
use crate::domain::weights::WeightVector;
use crate::ports::{EventPublisher, TableSource, TableSourceError};

/// Command to rank the alternatives of the configured table.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    /// Confirmed fractional weights.
    pub weights: WeightVector,
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub report: RankingReport,
    /// The emitted event.
    pub event: RankingComputed,
}

/// Error type for ranking alternatives.
#[derive(Debug, Clone, Error)]
pub enum RankAlternativesError {
    /// The table could not be loaded.
    #[error(transparent)]
    Table(#[from] TableSourceError),

    /// The table loaded but its columns could not be resolved.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Event serialization or publishing failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<RankAlternativesError> for DomainError {
    fn from(err: RankAlternativesError) -> Self {
        match err {
            RankAlternativesError::Table(e) => e.into(),
            RankAlternativesError::Matrix(e) => e.into(),
            RankAlternativesError::Domain(e) => e,
        }
    }
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    table_source: Arc<dyn TableSource>,
    event_publisher: Arc<dyn EventPublisher>,
    pipeline: RankingPipeline,
}

impl RankAlternativesHandler {
    pub fn new(
        table_source: Arc<dyn TableSource>,
        event_publisher: Arc<dyn EventPublisher>,
        pipeline: RankingPipeline,
    ) -> Self {
        Self {
            table_source,
            event_publisher,
            pipeline,
        }
    }

    pub fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, RankAlternativesError> {
        let run_id = RunId::new();
        debug!(run_id = %run_id, source = %self.table_source.describe(), weights = %cmd.weights, "Ranking alternatives");

        // 1. Load the table
        let table = self.table_source.load()?;

        // 2. Rank (column errors abort before any scoring)
        let report = self.pipeline.run(&table, &cmd.weights)?;

        // 3. Create and publish event
        let event = RankingComputed::from_report(run_id, &report, Timestamp::now());
        let envelope = EventEnvelope::from_event(&event).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to serialize event: {}", e))
        })?;
        self.event_publisher.publish(envelope)?;

        info!(
            run_id = %run_id,
            alternatives = report.alternatives.len(),
            tiers = report.tiers.len(),
            "Alternatives ranked"
        );

        Ok(RankAlternativesResult { report, event })
    }
}
