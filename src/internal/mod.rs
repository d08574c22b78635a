//! termecho's own diagnostic channel, for sink fallbacks, config loading and icon detection.
//!
//! Diagnostics go to stderr so they never mix with the host's echoed messages on stdout.
//! Uses `OnceLock` so the threshold is fixed by the first `init` call; before that every
//! call is a no-op, which keeps library users silent unless they opt in.

use crate::fmt::color;
use crate::level::Level;
use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

struct Diagnostics {
    min_level: Level,
    colors: bool,
}

static DIAGNOSTICS: OnceLock<Diagnostics> = OnceLock::new();

/// Enables diagnostics at `min_level` and above. Later calls are no-ops.
pub fn init(min_level: Level) {
    let was_init = DIAGNOSTICS.get().is_some();
    DIAGNOSTICS.get_or_init(|| Diagnostics {
        min_level,
        colors: io::stderr().is_terminal(),
    });
    if !was_init {
        debug("INTERNAL", &format!("Diagnostics enabled at {min_level}"));
    }
}

#[must_use]
pub fn is_enabled(level: Level) -> bool {
    DIAGNOSTICS.get().is_some_and(|d| level >= d.min_level)
}

const fn level_color(level: Level) -> &'static str {
    match level {
        Level::Trace | Level::Debug => color::GRAY,
        Level::Info => color::CYAN,
        Level::Warn => color::YELLOW,
        Level::Error => color::RED,
    }
}

fn format_line(level: Level, scope: &str, msg: &str, colors: bool) -> String {
    if colors {
        format!(
            "{}{}{} {}{scope:<8}{} {msg}",
            level_color(level),
            level.tag(),
            color::RESET,
            color::DIM,
            color::RESET,
        )
    } else {
        format!("{} {scope:<8} {msg}", level.tag())
    }
}

/// Pre-init calls silently vanish rather than printing.
fn log(level: Level, scope: &str, msg: &str) {
    if !is_enabled(level) {
        return;
    }
    let Some(diag) = DIAGNOSTICS.get() else {
        return;
    };
    let line = format_line(level, scope, msg, diag.colors);
    let _ = writeln!(io::stderr(), "{line}");
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
