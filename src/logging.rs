//! Tracing subscriber setup
//!
//! Installed once by each binary. `RUST_LOG`, when set, takes precedence over
//! the configured level.

use crate::config::{AppConfig, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),
}

/// Build the level filter, preferring `RUST_LOG` over `level`
pub fn env_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", level, e))),
    }
}

/// Install the global subscriber described by `config`
pub fn init_tracing(config: &AppConfig) -> Result<(), LoggingError> {
    let filter = env_filter(&config.log_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(false))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| LoggingError::InitializationError(e.to_string()))?;

    tracing::info!(
        env = %config.app_env,
        format = ?config.log_format,
        "logging initialized"
    );
    Ok(())
}
