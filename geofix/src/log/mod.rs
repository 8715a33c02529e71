//! Logging setup.
//!
//! Installs the global `tracing` subscriber: an env-filtered formatter with
//! local-time timestamps, optionally teeing into a daily-rolled log file.
//! `RUST_LOG` overrides the configured default filter.

use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "geofix=info";

/// Errors that can occur during logging setup.
#[derive(Debug, Error)]
pub enum LogError {
    /// A global subscriber is already installed.
    #[error("Failed to install logging subscriber: {0}")]
    Init(String),
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Directory for the daily-rolled log file; `None` logs to stderr only.
    pub file_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            file_dir: None,
        }
    }
}

impl LogConfig {
    /// Set the fallback filter directive.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Enable file output under the given directory.
    pub fn with_file_dir(mut self, dir: PathBuf) -> Self {
        self.file_dir = Some(dir);
        self
    }
}

/// Install the global tracing subscriber.
///
/// Returns the appender worker guard when file output is enabled; the
/// caller must keep it alive for buffered log lines to flush.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>, LogError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    match &config.file_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "geofix.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| LogError::Init(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(LocalTime::rfc_3339())
                .try_init()
                .map_err(|e| LogError::Init(e.to_string()))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.filter, DEFAULT_LOG_FILTER);
        assert!(config.file_dir.is_none());
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::default()
            .with_filter("geofix=debug")
            .with_file_dir(PathBuf::from("/tmp/geofix-logs"));
        assert_eq!(config.filter, "geofix=debug");
        assert_eq!(config.file_dir, Some(PathBuf::from("/tmp/geofix-logs")));
    }
}
