//! Tracing initialisation for the runner binary.
//!
//! Call [`init_tracing`] once at program start. Later calls are ignored
//! since the global subscriber can only be set once per process.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` wins over `config.level` when it is set and parses.
/// Log lines go to stderr so report output on stdout stays clean.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        init_tracing(&LoggingConfig {
            json: true,
            ..config
        });
        tracing::info!("still logging");
    }
}
