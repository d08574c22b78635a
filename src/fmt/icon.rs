//! Not every terminal font has Nerd Font glyphs, so icons come in two families plus "off".
//!
//! The active mode is process-wide. It is chosen once at startup from the environment
//! and afterwards only changes through the explicit `force_*`/`disable_icons` calls or
//! [`reinit`].

use crate::internal;
use crate::message::MessageType;
use std::fmt;
use std::str::FromStr;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Environment variable that overrides detection entirely.
pub const NERD_FONT_ENV: &str = "NERD_FONT_ENABLED";

/// Terminals that commonly ship with, or are usually configured with, a Nerd Font.
const NERD_FONT_TERMINALS: &[&str] = &[
    "alacritty",
    "kitty",
    "wezterm",
    "hyper",
    "rio",
    "ghostty",
    "konsole",
    "gnome-terminal",
    "tilix",
    "terminator",
    "iterm",
    "warp",
    "tabby",
];

const TERMINAL_NAME_VARS: &[&str] = &["TERM_PROGRAM", "TERMINAL", "TERM"];

/// Set only inside the corresponding terminal emulators.
const TERMINAL_MARKER_VARS: &[&str] = &[
    "KITTY_WINDOW_ID",
    "ALACRITTY_SOCKET",
    "WEZTERM_EXECUTABLE",
    "ITERM_SESSION_ID",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconMode {
    /// No glyphs at all, regardless of per-call options.
    None = 0,
    /// Unicode symbols and emoji that render in any modern terminal.
    #[default]
    Plain = 1,
    /// Private-use glyphs from a patched Nerd Font.
    NerdFont = 2,
}

impl IconMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Plain => "plain",
            Self::NerdFont => "nerdfont",
        }
    }
}

impl fmt::Display for IconMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIconModeError(String);

impl fmt::Display for ParseIconModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown icon mode: '{}'", self.0)
    }
}

impl std::error::Error for ParseIconModeError {}

impl FromStr for IconMode {
    type Err = ParseIconModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "plain" | "regular" | "unicode" => Ok(Self::Plain),
            "nerdfont" | "nerd" | "nerd-font" => Ok(Self::NerdFont),
            _ => Err(ParseIconModeError(s.to_string())),
        }
    }
}

/// Glyph for `kind` in `mode`. Empty for [`IconMode::None`].
#[must_use]
pub const fn glyph(kind: MessageType, mode: IconMode) -> &'static str {
    match mode {
        IconMode::None => "",
        IconMode::Plain => plain_glyph(kind),
        IconMode::NerdFont => nerd_glyph(kind),
    }
}

/// Wide emoji with a variation selector carry a trailing space so the text that follows
/// does not overlap them in terminals that render them two cells wide.
const fn plain_glyph(kind: MessageType) -> &'static str {
    match kind {
        MessageType::Success => "✅",
        MessageType::Error => "❌",
        MessageType::Warning => "⚠️ ",
        MessageType::Info => "ℹ️ ",
        MessageType::Debug => "🐛",
        MessageType::Critical => "🚨",
        MessageType::Search => "🔍",
        MessageType::Sync | MessageType::Update => "🔄",
        MessageType::Download => "⬇️ ",
        MessageType::Refresh => "🔃",
        MessageType::Upload | MessageType::Upgrade => "⬆️ ",
        MessageType::Delete => "🗑️ ",
        MessageType::Git => "📦",
        MessageType::New => "➕",
        MessageType::Edit => "✏️ ",
        MessageType::Generation => "⚙️ ",
        MessageType::Find => "🔎",
        MessageType::Link => "🔗",
        MessageType::Unlink => "⛓️‍💥",
        MessageType::Install => "📥",
        MessageType::Font => "🔤",
        MessageType::Theme => "🎨",
        MessageType::Icon => "😀",
        MessageType::Default => "●",
    }
}

const fn nerd_glyph(kind: MessageType) -> &'static str {
    match kind {
        MessageType::Success => "\u{f00c}",
        MessageType::Error => "\u{f00d}",
        MessageType::Warning => "\u{f071}",
        MessageType::Info => "\u{f129}",
        MessageType::Debug => "\u{f188}",
        MessageType::Critical => "\u{f06a}",
        MessageType::Search | MessageType::Find => "\u{f002}",
        MessageType::Sync | MessageType::Refresh | MessageType::Update => "\u{f021}",
        MessageType::Download | MessageType::Install => "\u{f019}",
        MessageType::Upload => "\u{f093}",
        MessageType::Delete => "\u{f1f8}",
        MessageType::Git => "\u{e702}",
        MessageType::New => "\u{f067}",
        MessageType::Edit => "\u{f040}",
        MessageType::Generation => "\u{f013}",
        MessageType::Link => "\u{f0c1}",
        MessageType::Unlink => "\u{f127}",
        MessageType::Upgrade => "\u{f062}",
        MessageType::Font => "\u{f031}",
        MessageType::Theme => "\u{f1fc}",
        MessageType::Icon => "\u{f118}",
        MessageType::Default => "\u{f111}",
    }
}

/// Glyph lookup by type name. Unknown names get the mode's `default` glyph.
#[must_use]
pub fn glyph_for_name(name: &str, mode: IconMode) -> &'static str {
    glyph(MessageType::parse_lenient(name), mode)
}

fn non_empty<F>(env: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(key).filter(|v| !v.is_empty())
}

/// `Some(true)` for `true`/`1`, `Some(false)` for any other non-empty value, `None` when unset.
fn explicit_preference<F>(env: &F) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(env, NERD_FONT_ENV).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn terminal_name_matches<F>(env: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    TERMINAL_NAME_VARS
        .iter()
        .filter_map(|var| non_empty(env, var))
        .map(|value| value.to_lowercase())
        .any(|value| NERD_FONT_TERMINALS.iter().any(|t| value.contains(t)))
}

fn font_name_matches<F>(env: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(env, "FONT").is_some_and(|font| font.to_lowercase().contains("nerd"))
}

fn terminal_marker_present<F>(env: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    TERMINAL_MARKER_VARS
        .iter()
        .any(|var| non_empty(env, var).is_some())
}

/// Heuristic probe against an arbitrary environment lookup. Has no side effects.
///
/// Order: explicit `NERD_FONT_ENABLED`, terminal names, `FONT`, terminal marker variables.
/// An explicit value decides alone; the heuristics only run when it is unset.
#[must_use]
pub fn detect_with<F>(env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = explicit_preference(&env) {
        return explicit;
    }
    terminal_name_matches(&env) || font_name_matches(&env) || terminal_marker_present(&env)
}

/// [`detect_with`] against the process environment.
#[must_use]
pub fn detect() -> bool {
    detect_with(|key| std::env::var(key).ok())
}

/// Mode chosen at startup. Only an explicit opt-in selects Nerd Font glyphs; a positive
/// heuristic is reported through [`is_nerd_font_detected`] but not acted on.
fn startup_mode<F>(env: &F) -> IconMode
where
    F: Fn(&str) -> Option<String>,
{
    if explicit_preference(env) == Some(true) {
        IconMode::NerdFont
    } else {
        IconMode::Plain
    }
}

#[derive(Debug, Clone, Copy)]
struct IconState {
    mode: IconMode,
    nerd_font_detected: bool,
}

impl IconState {
    fn from_env<F>(env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = startup_mode(&env);
        let nerd_font_detected = detect_with(env);
        internal::debug(
            "ICONS",
            &format!("Icon mode {mode} (nerd font detected: {nerd_font_detected})"),
        );
        Self {
            mode,
            nerd_font_detected,
        }
    }
}

static ICON_STATE: LazyLock<RwLock<IconState>> =
    LazyLock::new(|| RwLock::new(IconState::from_env(|key| std::env::var(key).ok())));

/// Re-runs startup selection and detection against the process environment.
pub fn reinit() {
    reinit_with(|key| std::env::var(key).ok());
}

/// Re-runs startup selection and detection against a caller-supplied environment.
pub fn reinit_with<F>(env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let state = IconState::from_env(env);
    *ICON_STATE.write().unwrap_or_else(PoisonError::into_inner) = state;
}

#[must_use]
pub fn current_icon_mode() -> IconMode {
    ICON_STATE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .mode
}

/// Whether the startup probe believed a Nerd Font was available.
#[must_use]
pub fn is_nerd_font_detected() -> bool {
    ICON_STATE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .nerd_font_detected
}

pub fn set_icon_mode(mode: IconMode) {
    ICON_STATE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .mode = mode;
}

pub fn force_nerd_font() {
    set_icon_mode(IconMode::NerdFont);
}

pub fn force_plain_icons() {
    set_icon_mode(IconMode::Plain);
}

/// Turns icons off for every call, even ones whose options ask for icons.
pub fn disable_icons() {
    set_icon_mode(IconMode::None);
}
