//! Configuration types.
//!
//! The process exposes no CLI surface; configuration comes from environment
//! variables (optionally via a `.env` file) with fixed defaults for every
//! value.

use std::env;
use std::path::PathBuf;

use crate::config::constants::*;

/// Logging level for the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl LogLevel {
    fn from_env_value(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

/// Log output format.
///
/// `Plain` is human-readable with colors; `Json` emits one JSON object per
/// line for machine parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Constructed from the environment via [`Config::from_env`], or directly in
/// tests.
#[derive(Debug, Clone)]
pub struct Config {
    /// Vehicle-location feed endpoint.
    pub feed_url: String,

    /// Agency whose vehicles are ingested.
    pub agency: String,

    /// Optional route filter; `None` ingests all of the agency's routes.
    pub route: Option<String>,

    /// Seconds between ingest cycles.
    pub ingest_interval_secs: u64,

    /// Seconds between alert cycles.
    pub alert_interval_secs: u64,

    /// SQLite database path.
    pub db_path: PathBuf,

    /// Optional fence definition file; `None` uses the embedded default set.
    pub fences_path: Option<PathBuf>,

    /// Per-request timeout for feed calls, in seconds.
    pub request_timeout_secs: u64,

    /// Log level.
    pub log_level: LogLevel,

    /// Log format.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            agency: DEFAULT_AGENCY.to_string(),
            route: Some(DEFAULT_ROUTE.to_string()),
            ingest_interval_secs: DEFAULT_INGEST_INTERVAL_SECS,
            alert_interval_secs: DEFAULT_ALERT_INTERVAL_SECS,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            fences_path: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Builds a configuration from environment variables, falling back to
    /// the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let route = match env::var(ENV_ROUTE) {
            Ok(value) if value.is_empty() => None,
            Ok(value) => Some(value),
            Err(_) => defaults.route,
        };

        Self {
            feed_url: env::var(ENV_FEED_URL).unwrap_or(defaults.feed_url),
            agency: env::var(ENV_AGENCY).unwrap_or(defaults.agency),
            route,
            ingest_interval_secs: env_u64(ENV_INGEST_INTERVAL_SECS, defaults.ingest_interval_secs),
            alert_interval_secs: env_u64(ENV_ALERT_INTERVAL_SECS, defaults.alert_interval_secs),
            db_path: env::var(ENV_DB_PATH).map(PathBuf::from).unwrap_or(defaults.db_path),
            fences_path: env::var(ENV_FENCES_PATH).ok().map(PathBuf::from),
            request_timeout_secs: env_u64(ENV_REQUEST_TIMEOUT_SECS, defaults.request_timeout_secs),
            log_level: env::var(ENV_LOG_LEVEL)
                .map(|v| LogLevel::from_env_value(&v))
                .unwrap_or(defaults.log_level),
            log_format: env::var(ENV_LOG_FORMAT)
                .map(|v| {
                    if v.eq_ignore_ascii_case("json") {
                        LogFormat::Json
                    } else {
                        LogFormat::Plain
                    }
                })
                .unwrap_or(defaults.log_format),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key).ok().and_then(|value| value.parse().ok()).unwrap_or(default)
}
