use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Unknown log format: {0} (expected json, pretty or compact)")]
    UnknownFormat(String),

    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Output format of the fmt subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(LoggingError::UnknownFormat(other.to_string())),
        }
    }
}

/// Install the global tracing subscriber
///
/// `LOG_LEVEL` and `LOG_FORMAT` override the settings; `RUST_LOG`, when set,
/// takes precedence over both for filtering.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.level.clone());
    let log_format: LogFormat = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| settings.format.clone())
        .parse()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = match log_format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Pretty => subscriber.pretty().try_init(),
        LogFormat::Compact => subscriber.compact().try_init(),
    };

    installed.map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))?;

    tracing::info!(level = %log_level, format = ?log_format, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("COMPACT".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(LoggingError::UnknownFormat(f)) if f == "xml"
        ));
    }
}
