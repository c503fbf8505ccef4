//! Tracing setup for the screening tooling.
//!
//! The output format follows the runtime environment: development gets the
//! pretty multi-line formatter, test and production get single-line compact
//! output without ANSI color. RUST_LOG always wins over the configured
//! level.

use crate::config::{AppConfig, AppEnvironment};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("could not install the global subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Install the global subscriber for the configured environment.
pub fn init(config: &AppConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.telemetry.log_level)?)
        .with_target(false);

    match config.environment {
        AppEnvironment::Development => builder.pretty().finish().try_init()?,
        AppEnvironment::Test | AppEnvironment::Production => {
            builder.compact().with_ansi(false).finish().try_init()?
        }
    }

    Ok(())
}

fn env_filter(configured_level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            EnvFilter::try_new(configured_level).map_err(|source| TelemetryError::Filter {
                value: configured_level.to_string(),
                source,
            })
        }
    }
}
