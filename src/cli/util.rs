//! Startup helpers shared by the binary and the subcommands.

use crate::cli::Cli;
use crate::config::Config;
use crate::fmt::icon;
use crate::internal;
use crate::message::MessageType;
use crate::output;

/// Unknown names fall back to `default` with a diagnostic instead of failing.
#[must_use]
pub fn parse_kind(name: &str) -> MessageType {
    name.parse().unwrap_or_else(|e| {
        internal::warn("CLI", &format!("{e}, using 'default'"));
        MessageType::Default
    })
}

/// Explicit `--config` path, or the default location.
///
/// # Errors
/// Config directory missing or invalid TOML.
pub fn load_config(cli: &Cli) -> Result<Config, crate::Error> {
    cli.config
        .as_deref()
        .map_or_else(Config::load, Config::load_from)
}

/// Command-line flags win over the config file, so they are applied after it.
pub fn apply_global_flags(cli: &Cli) {
    if let Some(mode) = cli.icon_mode {
        icon::set_icon_mode(mode.into());
    }
    if cli.no_log {
        output::set_logging_enabled(false);
    } else if let Some(target) = &cli.log_target
        && let Err(e) = output::set_log_target(target)
    {
        internal::error("CLI", &e.to_string());
    }
}
