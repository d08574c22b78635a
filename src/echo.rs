//! The dispatch pipeline: resolve presentation, print, mirror to the log, then run the
//! post-output action.
//!
//! [`exit_on_error`] is the only path in the crate that does not return.

use crate::fmt::{color, icon};
use crate::message::MessageType;
use crate::options::Options;
use crate::output;
use std::fmt;
use std::io::{self, Write};

/// Returned for error-class messages: the text was already printed and logged, so the
/// caller should not report it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SilentError {
    kind: MessageType,
    text: String,
}

impl SilentError {
    #[must_use]
    pub const fn kind(&self) -> MessageType {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for SilentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "silent error")
    }
}

impl std::error::Error for SilentError {}

fn color_fragment(kind: MessageType, opts: &Options) -> String {
    if opts.no_color() {
        String::new()
    } else {
        color::resolve_color(kind).into_owned()
    }
}

fn style_fragment(opts: &Options) -> String {
    let mut style = String::new();
    if opts.no_style() {
        return style;
    }
    if opts.bold() {
        style.push_str(color::BOLD);
    }
    if opts.italic() {
        style.push_str(color::ITALIC);
    }
    style
}

fn icon_fragment(kind: MessageType, opts: &Options) -> String {
    if !opts.show_icons() || opts.no_icon() {
        return String::new();
    }
    let glyph = icon::glyph(kind, icon::current_icon_mode());
    if glyph.is_empty() {
        String::new()
    } else {
        format!("{glyph} ")
    }
}

/// The line `echo` would print, without the newline: `style + color + icon + text + reset`.
#[must_use]
pub fn render(kind: MessageType, text: &str, opts: &Options) -> String {
    let style = style_fragment(opts);
    let color = color_fragment(kind, opts);
    let icon = icon_fragment(kind, opts);
    let reset = color::RESET;
    format!("{style}{color}{icon}{text}{reset}")
}

/// Terminates the process with status 1. No cleanup hooks run; sink lines are written
/// unbuffered, so nothing is pending.
fn exit_on_error() -> ! {
    std::process::exit(1)
}

/// Full pipeline against an arbitrary writer instead of stdout.
///
/// # Errors
/// [`SilentError`] when `kind` is error-class. This is a signal, not a failure: the message
/// has been printed and logged.
pub fn echo_to<W: Write>(
    out: &mut W,
    kind: MessageType,
    text: &str,
    opts: &Options,
) -> Result<String, SilentError> {
    let line = render(kind, text, opts);
    let _ = writeln!(out, "{line}");

    output::log_only(kind, text);

    if let Some(callback) = opts.callback() {
        callback(kind, text);
    } else if opts.exit() && kind.is_error_class() {
        let _ = out.flush();
        exit_on_error();
    }

    if kind.is_error_class() {
        Err(SilentError {
            kind,
            text: text.to_string(),
        })
    } else {
        Ok(text.to_string())
    }
}

/// Prints a styled message to stdout and mirrors it to the log sink.
///
/// With [`Options::with_callback`] the callback runs before this returns. With
/// [`Options::with_exit`] an error-class message terminates the process instead.
///
/// # Errors
/// [`SilentError`] for error-class types (`error`, `critical`, `debug`).
pub fn echo(kind: MessageType, text: &str, opts: &Options) -> Result<String, SilentError> {
    echo_to(&mut io::stdout(), kind, text, opts)
}
