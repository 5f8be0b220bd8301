//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::{AppSettings, Environment, LogFormat};

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
    /// Include span events (new, close)
    pub span_events: bool,
    /// Include file and line numbers
    pub file_line: bool,
    /// Include thread names
    pub thread_names: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
            file_line: true,
            thread_names: false,
        }
    }
}

impl TracingConfig {
    /// Create a development configuration with debug logging
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json: false,
            span_events: true,
            file_line: true,
            thread_names: true,
        }
    }

    /// Create a production configuration with JSON logging
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
            span_events: false,
            file_line: false,
            thread_names: false,
        }
    }

    /// Pick the preset for the environment, honoring an explicit log format
    #[must_use]
    pub fn for_settings(settings: &AppSettings) -> Self {
        let mut config = match settings.env {
            Environment::Development => Self::development(),
            Environment::Staging => Self::default(),
            Environment::Production => Self::production(),
        };
        config.json = settings.log_format == LogFormat::Json;
        config
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

fn install(config: &TracingConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let fmt_layer = fmt::layer()
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_thread_names(config.thread_names)
        .with_span_events(config.span_events());

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
    }
}

/// Initialize the tracing subscriber with default configuration
///
/// Uses `RUST_LOG` environment variable for filtering if set,
/// otherwise defaults to "info" level.
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing() {
    init_tracing_with_config(TracingConfig::default());
}

/// Initialize the tracing subscriber with custom configuration
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing_with_config(config: TracingConfig) {
    install(&config).expect("tracing subscriber already initialized");
}

/// Try to initialize tracing, returning Ok if successful
///
/// Unlike `init_tracing`, this function will not panic if called multiple times.
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::default())
}

/// Try to initialize tracing with custom configuration
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    install(&config).map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
