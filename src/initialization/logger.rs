//! Logger initialization.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and the configured level then overrides it, so
/// `RUST_LOG=debug` still works for quick debugging. Noisy dependencies are
/// pinned to warn regardless of the application level.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger was already
/// installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder
        .filter_level(level)
        .filter_module("sqlx", LevelFilter::Warn)
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper", LevelFilter::Warn)
        .filter_module("fleet_tracker", level);

    match format {
        // One JSON object per line on stdout.
        LogFormat::Json => builder.format(|buf, record| {
            let line = serde_json::json!({
                "ts": chrono::Utc::now().timestamp_millis(),
                "level": record.level().as_str(),
                "target": record.target(),
                "msg": record.args().to_string(),
            });
            writeln!(buf, "{line}")
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {} {} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                paint_level(record.level()),
                record.target().cyan(),
                record.args()
            )
        }),
    };

    // try_init() instead of init(): tests may install the logger more than
    // once per process.
    builder.try_init().map_err(InitializationError::from)
}

fn paint_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN ".yellow(),
        Level::Info => "INFO ".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".purple(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logger_does_not_panic() {
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        // A second initialization must fail gracefully, not panic.
        let second = init_logger_with(LevelFilter::Info, LogFormat::Json);
        assert!(first.is_ok() || second.is_err());
    }
}
