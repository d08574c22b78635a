//! Unified error type for configuration and log-target operations.
//!
//! Echoing a message never produces this type: error-class messages return
//! [`SilentError`](crate::echo::SilentError) instead, and sink failures are swallowed.

use std::path::PathBuf;

/// Error type for termecho operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Log target could not be created or opened. The sink is left disabled.
    LogTarget {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Unknown message type name.
    InvalidMessageType(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::LogTarget { path, source } => {
                write!(f, "failed to set log target '{}': {source}", path.display())
            }
            Self::InvalidMessageType(name) => write!(f, "unknown message type: '{name}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::LogTarget { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::ConfigDirNotFound | Self::InvalidMessageType(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
