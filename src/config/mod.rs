//! Runtime settings for scoring, the triangle, table parsing and logging.
//!
//! Settings come from an optional file and then `PRIORITY_TRIANGLE__*`
//! environment variables (`.env` is honoured in development). Every section
//! has defaults, so an empty environment is a valid configuration.
//!
//! ```no_run
//! use priority_triangle::config::AppConfig;
//!
//! let settings = AppConfig::load().expect("settings");
//! settings.validate().expect("valid settings");
//! let policy = settings.scoring.to_policy();
//! ```

mod error;
mod logging;
mod scoring;
mod table;
mod triangle;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scoring::ScoringConfig;
pub use table::TableConfig;
pub use triangle::TriangleConfig;

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix for all settings
pub const ENV_PREFIX: &str = "PRIORITY_TRIANGLE";

/// All settings sections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Normalization and tier detection
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Vertex assignment and click tolerance
    #[serde(default)]
    pub triangle: TriangleConfig,

    /// Input table parsing and header overrides
    #[serde(default)]
    pub table: TableConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads settings from the environment only.
    ///
    /// Section and key are joined with `__`:
    /// `PRIORITY_TRIANGLE__SCORING__GAP_MULTIPLIER=2.5` sets
    /// `scoring.gap_multiplier`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_file(None)
    }

    /// Reads `path` (format from its extension) and then the environment,
    /// which wins on conflicts.
    ///
    /// # Errors
    /// `LoadError` for an unreadable file or a value of the wrong type.
    pub fn load_with_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Loads settings as [`load_with_file`](Self::load_with_file) does and
    /// validates them.
    ///
    /// # Errors
    /// `LoadError` as for loading, `ValidationFailed` for the first bad value.
    pub fn load_validated(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::load_with_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks each section in turn, stopping at the first bad value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.triangle.validate()?;
        self.table.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
