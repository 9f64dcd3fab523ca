//! Logging setup
//!
//! Text, JSON or pretty output through `tracing-subscriber`. `RUST_LOG`
//! overrides the configured level when set.
//!
//! The TUI owns the terminal, so interactive mode logs only to a file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Multi-line output with colors
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(format!(
                "Invalid log format: '{s}'. Valid options: text, json, pretty"
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Logging disabled
    Off,
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub target: LogTarget,
}

impl LoggingConfig {
    #[must_use]
    pub fn new(format: LogFormat, level: impl Into<String>, target: LogTarget) -> Self {
        Self {
            format,
            level: level.into(),
            target,
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Install the global subscriber
    ///
    /// Call once at startup.
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened or a subscriber is
    /// already installed.
    pub fn init(&self) -> Result<()> {
        match &self.target {
            LogTarget::Off => Ok(()),
            LogTarget::Stderr => self.install(std::io::stderr, true),
            LogTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("opening log file {}", path.display()))?;
                self.install(Mutex::new(file), false)
            }
        }
    }

    fn install<W>(&self, writer: W, ansi: bool) -> Result<()>
    where
        W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(writer)
            .with_ansi(ansi);

        let result = match self.format {
            LogFormat::Json => builder
                .json()
                .with_current_span(true)
                .flatten_event(true)
                .with_target(true)
                .try_init(),
            LogFormat::Pretty => builder
                .pretty()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => builder.with_target(false).with_level(true).try_init(),
        };

        result.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        debug!(format = %self.format, level = %self.level, "logging initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }

    #[test]
    fn log_format_from_str_invalid() {
        let err = "loud".parse::<LogFormat>().unwrap_err();
        assert!(err.contains("Invalid log format: 'loud'"));
    }

    #[test]
    fn log_format_display_roundtrips() {
        for format in [LogFormat::Text, LogFormat::Json, LogFormat::Pretty] {
            assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
        }
    }

    #[test]
    fn off_target_installs_nothing() {
        let config = LoggingConfig::new(LogFormat::Text, "info", LogTarget::Off);
        assert!(config.init().is_ok());
    }
}
