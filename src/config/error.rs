//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Gap multiplier must be a positive number")]
    InvalidGapMultiplier,

    #[error("Podium size must be at least 1")]
    InvalidPodiumSize,

    #[error("Display scale must be a positive number")]
    InvalidDisplayScale,

    #[error("Display decimals must be at most 10")]
    InvalidDisplayDecimals,

    #[error("Invalid vertex order: {0}")]
    InvalidVertexOrder(String),

    #[error("Inside tolerance must be between 0 and 0.1")]
    InvalidTolerance,

    #[error("Table delimiter must be a single character, got '{0}'")]
    InvalidDelimiter(String),

    #[error("Invalid log filter '{0}'")]
    InvalidLogLevel(String),
}
