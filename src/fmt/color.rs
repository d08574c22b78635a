//! ANSI escape constants and the process-wide color table.
//!
//! The table is two layers: the built-in defaults from the message registry and a
//! user override map keyed by the type's string tag. Overrides are checked first.

use crate::message::MessageType;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[97m";
pub const GRAY: &str = "\x1b[90m";
pub const LIGHT_BLUE: &str = "\x1b[94m";
pub const BOLD: &str = "\x1b[1m";
pub const ITALIC: &str = "\x1b[3m";
pub const DIM: &str = "\x1b[2m";
/// Terminates any active SGR styling so subsequent text returns to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// 24-bit color, used when config files specify overrides as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (leading `#` optional). Returns `None` on anything else so a typo
    /// in config can be reported instead of silently turning white.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    /// The raw `\x1b[38;2;R;G;Bm` escape, ready to be stored as a color override.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default colors plus a user override layer behind its own lock.
#[derive(Debug, Default)]
pub struct ColorTable {
    overrides: Mutex<HashMap<String, String>>,
}

static COLOR_TABLE: LazyLock<ColorTable> = LazyLock::new(ColorTable::new);

impl ColorTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn overrides(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.overrides.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Override for `kind` if one was set, otherwise the registry default.
    #[must_use]
    pub fn resolve(&self, kind: MessageType) -> Cow<'static, str> {
        self.overrides()
            .get(kind.as_str())
            .map_or(Cow::Borrowed(kind.default_color()), |c| {
                Cow::Owned(c.clone())
            })
    }

    /// Merges into the existing overrides; later keys replace earlier ones.
    ///
    /// Keys are not checked against the message catalog. An unknown key is stored and
    /// never matched.
    pub fn set_overrides<I, K, V>(&self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = self.overrides();
        for (k, v) in overrides {
            map.insert(k.into(), v.into());
        }
    }

    pub fn clear(&self) {
        self.overrides().clear();
    }

    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides().len()
    }
}

/// The process-wide table consulted by the dispatcher.
#[must_use]
pub fn global() -> &'static ColorTable {
    &COLOR_TABLE
}

/// Color the dispatcher would use for `kind` right now.
#[must_use]
pub fn resolve_color(kind: MessageType) -> Cow<'static, str> {
    global().resolve(kind)
}

/// Additive merge into the process-wide override layer.
pub fn set_color_overrides<I, K, V>(overrides: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    global().set_overrides(overrides);
}

pub fn clear_color_overrides() {
    global().clear();
}
