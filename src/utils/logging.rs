//! Structured logging setup.
//!
//! Configures the `tracing` ecosystem for the gateway.

use crate::config::LoggingConfig;
use crate::error::{GatewayError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| GatewayError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let initialized = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    initialized.map_err(|e| GatewayError::Config(format!("Failed to initialize logging: {}", e)))
}

