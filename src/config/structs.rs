//! Configuration struct definitions.

use serde::Deserialize;

/// Settings for termecho's own diagnostics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum diagnostic level printed to stderr.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Icon family selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// `auto`, `nerdfont`, `plain` or `none`. `auto` keeps the startup choice.
    pub mode: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            mode: "auto".to_string(),
        }
    }
}

/// Log sink settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Mirror echoed messages to the log file.
    pub enabled: bool,
    /// Explicit log file. `None` keeps the startup policy.
    pub target: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target: None,
        }
    }
}
