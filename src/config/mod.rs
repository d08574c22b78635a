//! TOML configuration for the process-wide state: color overrides, icon mode and log sink.
//!
//! A config only describes state; nothing changes until [`Config::apply`] is called.

mod structs;

pub use structs::{GeneralConfig, IconsConfig, LogConfig};

use crate::fmt::{Color, IconMode, color, icon};
use crate::internal;
use crate::level::Level;
use crate::output;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still be valid, so every section defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub icons: IconsConfig,
    pub log: LogConfig,
    /// Type tag → color. Values are `#RRGGBB`, a basic color name, or a raw escape sequence.
    pub colors: HashMap<String, String>,
}

/// Turns a config color value into an escape sequence.
fn color_escape(value: &str) -> Option<String> {
    if value.starts_with('#') {
        return Color::from_hex(value).map(Color::fg_ansi);
    }
    if value.starts_with('\x1b') {
        return Some(value.to_string());
    }
    let named = match value.to_lowercase().as_str() {
        "red" => color::RED,
        "green" => color::GREEN,
        "yellow" => color::YELLOW,
        "blue" => color::BLUE,
        "magenta" => color::MAGENTA,
        "cyan" => color::CYAN,
        "white" => color::WHITE,
        "gray" | "grey" => color::GRAY,
        "lightblue" | "light-blue" => color::LIGHT_BLUE,
        _ => return None,
    };
    Some(named.to_string())
}

impl Config {
    /// Loads the user config from the default location, or defaults if there is none.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file is invalid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// `<config dir>/termecho/termecho.conf`, e.g. `~/.config/termecho/termecho.conf`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("termecho").join("termecho.conf"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores the level as a string for TOML ergonomics.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Warn)
    }

    /// `None` means `auto`: keep whatever the startup detection chose.
    #[must_use]
    pub fn parse_icon_mode(&self) -> Option<IconMode> {
        if self.icons.mode.eq_ignore_ascii_case("auto") {
            return None;
        }
        match self.icons.mode.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                internal::warn("CONFIG", &format!("{e}, keeping automatic icon mode"));
                None
            }
        }
    }

    /// Color overrides as escape sequences. Entries with unusable values are skipped.
    #[must_use]
    pub fn color_overrides(&self) -> HashMap<String, String> {
        self.colors
            .iter()
            .filter_map(|(kind, value)| {
                let escape = color_escape(value);
                if escape.is_none() {
                    internal::warn(
                        "CONFIG",
                        &format!("Ignoring color for '{kind}': unrecognized value '{value}'"),
                    );
                }
                escape.map(|e| (kind.clone(), e))
            })
            .collect()
    }

    /// Log target with `~` expanded.
    #[must_use]
    pub fn log_target(&self) -> Option<PathBuf> {
        self.log
            .target
            .as_deref()
            .map(|target| PathBuf::from(shellexpand::tilde(target).as_ref()))
    }

    /// Pushes this config into the process-wide color table, icon mode and log sink.
    ///
    /// Colors and icons are always applied. A bad log target leaves the sink disabled.
    ///
    /// # Errors
    /// [`crate::Error::LogTarget`] if the configured target cannot be opened.
    pub fn apply(&self) -> Result<(), crate::Error> {
        let overrides = self.color_overrides();
        if !overrides.is_empty() {
            internal::debug(
                "CONFIG",
                &format!("Applying {} color override(s)", overrides.len()),
            );
            color::set_color_overrides(overrides);
        }

        if let Some(mode) = self.parse_icon_mode() {
            icon::set_icon_mode(mode);
        }

        if !self.log.enabled {
            output::set_logging_enabled(false);
            return Ok(());
        }
        match self.log_target() {
            Some(target) => output::set_log_target(target),
            None => Ok(()),
        }
    }
}
