//! Logging setup.
//!
//! The engine only emits `tracing` events. Binaries and test harnesses that
//! want to see them call [`init_logging`] once at startup.

use std::env;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Configuration for the log subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive (trace, debug, info, warn, error, or `target=level` list)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to include event targets in output
    pub with_targets: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            with_targets: true,
        }
    }
}

impl LogConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `XOF_LOG_LEVEL` or `RUST_LOG`: Filter directive (default: info)
    /// - `XOF_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `XOF_LOG_TARGETS`: Include targets (default: true)
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("XOF_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("XOF_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            with_targets: env::var("XOF_LOG_TARGETS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    /// Builder-style method to set the filter directive
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Builder-style method to toggle JSON output
    pub fn with_json(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Parse the configured filter directive.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        EnvFilter::try_new(&self.log_level).map_err(|e| TelemetryError::Filter(e.to_string()))
    }
}

/// Install a global `tracing` subscriber.
///
/// # Errors
///
/// Returns `TelemetryError::Filter` for an unparsable directive and
/// `TelemetryError::Init` if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TelemetryError> {
    let env_filter = config.env_filter()?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(config.with_targets)
            .with_thread_ids(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(config.with_targets)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    tracing::debug!(
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "logging initialized"
    );
    Ok(())
}
