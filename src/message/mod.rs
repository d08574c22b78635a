//! The fixed catalog of message types.
//!
//! Every per-type property (string tag, default color, error class) is an exhaustive
//! `match`, so adding a variant fails to compile until each table covers it.

use crate::fmt::color;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Success,
    Error,
    Warning,
    Info,
    Debug,
    Critical,
    Search,
    Sync,
    Download,
    Refresh,
    Upload,
    Delete,
    Git,
    New,
    Edit,
    Update,
    Generation,
    Find,
    Link,
    Unlink,
    Upgrade,
    Install,
    Font,
    Theme,
    Icon,
    /// Fallback for names that match nothing else.
    #[default]
    Default,
}

impl MessageType {
    /// Canonical lowercase tag. Also the key for color overrides and the `type` field in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Critical => "critical",
            Self::Search => "search",
            Self::Sync => "sync",
            Self::Download => "download",
            Self::Refresh => "refresh",
            Self::Upload => "upload",
            Self::Delete => "delete",
            Self::Git => "git",
            Self::New => "new",
            Self::Edit => "edit",
            Self::Update => "update",
            Self::Generation => "generation",
            Self::Find => "find",
            Self::Link => "link",
            Self::Unlink => "unlink",
            Self::Upgrade => "upgrade",
            Self::Install => "install",
            Self::Font => "font",
            Self::Theme => "theme",
            Self::Icon => "icon",
            Self::Default => "default",
        }
    }

    /// Uppercased tag, used as the `level` of log entries.
    #[must_use]
    pub fn level(self) -> String {
        self.as_str().to_uppercase()
    }

    #[must_use]
    pub const fn default_color(self) -> &'static str {
        match self {
            Self::Success | Self::Upload | Self::New | Self::Install => color::GREEN,
            Self::Error | Self::Delete | Self::Unlink => color::RED,
            Self::Warning | Self::Update => color::YELLOW,
            Self::Info | Self::Generation => color::CYAN,
            Self::Debug => color::GRAY,
            Self::Search | Self::Edit | Self::Find => color::BLUE,
            Self::Sync | Self::Critical | Self::Git | Self::Link | Self::Theme => color::MAGENTA,
            Self::Refresh | Self::Upgrade => color::LIGHT_BLUE,
            Self::Download | Self::Font | Self::Icon | Self::Default => color::WHITE,
        }
    }

    /// Error-class types make `echo` return a `SilentError` and are the only ones that
    /// can trigger exit-on-error.
    ///
    /// `Debug` is in this set. That is long-standing observed behavior and callers rely
    /// on it, so it is kept as is.
    #[must_use]
    pub const fn is_error_class(self) -> bool {
        matches!(self, Self::Error | Self::Critical | Self::Debug)
    }

    /// Unknown names become [`MessageType::Default`] instead of failing.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    #[must_use]
    pub const fn all() -> [Self; 26] {
        [
            Self::Success,
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Critical,
            Self::Search,
            Self::Sync,
            Self::Download,
            Self::Refresh,
            Self::Upload,
            Self::Delete,
            Self::Git,
            Self::New,
            Self::Edit,
            Self::Update,
            Self::Generation,
            Self::Find,
            Self::Link,
            Self::Unlink,
            Self::Upgrade,
            Self::Install,
            Self::Font,
            Self::Theme,
            Self::Icon,
            Self::Default,
        ]
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMessageTypeError(String);

impl fmt::Display for ParseMessageTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown message type: '{}'", self.0)
    }
}

impl std::error::Error for ParseMessageTypeError {}

impl From<ParseMessageTypeError> for crate::Error {
    fn from(e: ParseMessageTypeError) -> Self {
        Self::InvalidMessageType(e.0)
    }
}

impl FromStr for MessageType {
    type Err = ParseMessageTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| ParseMessageTypeError(s.to_string()))
    }
}
