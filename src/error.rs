//! Error types for wordgrid
//!
//! Library code returns these typed errors; the binary wraps them in
//! `anyhow` at the boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a target word
///
/// Session setup stops on any of these. There is no placeholder fallback.
#[derive(Debug, Error)]
pub enum WordSourceError {
    /// The backing source could not be read
    #[error("word source unreachable: {0}")]
    Unreachable(#[from] std::io::Error),

    /// The source produced something that is not a 5-letter word
    #[error("malformed word '{entry}': {reason}")]
    Malformed {
        entry: String,
        reason: crate::core::WordError,
    },

    /// The source holds no words at all
    #[error("word source is empty")]
    Empty,
}

/// Failed login attempt
///
/// The `Display` text is meant to be shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter a username and password.")]
    MissingCredentials,

    #[error("{0}")]
    Rejected(String),
}

impl AuthError {
    /// Rejection with the default user-facing message
    #[must_use]
    pub fn login_failed() -> Self {
        Self::Rejected("Login failed.".to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}
