//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub enrichment: EnrichmentConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_env(),
            log_format: LogFormat::default(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(()),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Attendee enrichment settings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EnrichmentConfig {
    /// Upper bound on user lookups in flight at once (0 = no cap)
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: default_max_concurrent_lookups(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "event-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_concurrent_lookups() -> usize {
    32
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: parse_var(&lookup, "APP_ENV")?.unwrap_or_default(),
                log_format: parse_var(&lookup, "LOG_FORMAT")?.unwrap_or_default(),
            },
            enrichment: EnrichmentConfig {
                max_concurrent_lookups: parse_var(&lookup, "ENRICHMENT_MAX_CONCURRENT_LOOKUPS")?
                    .unwrap_or_else(default_max_concurrent_lookups),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
