//! `termecho` - styled terminal messages with a structured log mirror.
//!
//! Each message has a type (success, error, warning, ...) that picks its color and icon.
//! [`echo`] prints the styled line to stdout, appends a JSON line to the log sink, and then
//! either runs the caller's callback or, for error-class types with exit enabled,
//! terminates the process.
//!
//! # Example
//!
//! ```no_run
//! use termecho::{MessageType, Options};
//!
//! let opts = Options::new().with_bold().with_icon();
//!
//! termecho::echo(MessageType::Success, "Deployment finished", &opts).ok();
//!
//! if let Err(silent) = termecho::echo(MessageType::Error, "Upload failed", &opts) {
//!     // Already printed and logged.
//!     assert_eq!(silent.text(), "Upload failed");
//! }
//!
//! termecho::set_color_overrides([("success", "\x1b[92m")]);
//! termecho::force_nerd_font();
//! let _ = termecho::set_log_target("/tmp/deploy.log");
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `termecho` binary

pub mod config;
pub mod echo;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod message;
pub mod options;
pub mod output;
pub mod shortcuts;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use echo::{SilentError, echo, echo_to, render};
pub use error::Error;
pub use fmt::{
    IconMode, clear_color_overrides, current_icon_mode, disable_icons, force_nerd_font,
    force_plain_icons, is_nerd_font_detected, resolve_color, set_color_overrides, set_icon_mode,
};
pub use level::Level;
pub use message::MessageType;
pub use options::{Callback, Options};
pub use output::{
    LogEntry, LogSink, close_log, is_logging_enabled, log_only, log_target, set_log_target,
    set_logging_enabled,
};
