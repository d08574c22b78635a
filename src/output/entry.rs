//! One JSON object per line so `grep` and `jq` work on the log file directly.

use crate::message::MessageType;
use chrono::{Local, SecondsFormat};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// RFC 3339 with the local offset.
    pub timestamp: String,
    /// Uppercased type tag, e.g. `SUCCESS`.
    pub level: String,
    /// The raw text, without ANSI escapes or icon.
    pub message: String,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub binary: String,
}

impl LogEntry {
    #[must_use]
    pub fn new(kind: MessageType, message: &str, binary: &str) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            level: kind.level(),
            message: message.to_string(),
            kind,
            binary: binary.to_string(),
        }
    }

    /// Serialized line including the trailing newline. Falls back to `[LEVEL] message`
    /// so a record is never dropped because of serialization.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = serde_json::to_string(self).unwrap_or_else(|_| self.fallback_line());
        line.push('\n');
        line
    }

    #[must_use]
    pub fn fallback_line(&self) -> String {
        format!("[{}] {}", self.level, self.message)
    }
}
