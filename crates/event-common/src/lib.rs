//! # event-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{AppConfig, AppSettings, ConfigError, EnrichmentConfig, Environment, LogFormat};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
