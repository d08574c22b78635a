//! Per-call presentation and post-output settings.
//!
//! `Options` is a plain value. Every `with_*` method consumes it and returns the changed
//! copy, so a shared base can be cloned and specialized per call site.

use crate::message::MessageType;
use std::fmt;
use std::sync::Arc;

/// Invoked synchronously after a message is printed and logged.
pub type Callback = Arc<dyn Fn(MessageType, &str) + Send + Sync>;

#[derive(Clone, Default)]
pub struct Options {
    bold: bool,
    italic: bool,
    no_color: bool,
    no_icon: bool,
    show_icons: bool,
    no_style: bool,
    exit: bool,
    callback: Option<Callback>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("bold", &self.bold)
            .field("italic", &self.italic)
            .field("no_color", &self.no_color)
            .field("no_icon", &self.no_icon)
            .field("show_icons", &self.show_icons)
            .field("no_style", &self.no_style)
            .field("exit", &self.exit)
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Options {
    /// Plain text in the type's color: no style, no icon, no callback, no exit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub const fn without_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Drops bold and italic even if they were requested.
    #[must_use]
    pub const fn without_style(mut self) -> Self {
        self.no_style = true;
        self
    }

    /// Icons are opt-in per call. Still suppressed while the global mode is `None`.
    #[must_use]
    pub const fn with_icon(mut self) -> Self {
        self.show_icons = true;
        self.no_icon = false;
        self
    }

    #[must_use]
    pub const fn without_icon(mut self) -> Self {
        self.no_icon = true;
        self.show_icons = false;
        self
    }

    /// Terminate the process after an error-class message. Replaces any callback.
    #[must_use]
    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self.callback = None;
        self
    }

    /// Run `callback` after output instead of exiting. Replaces the exit flag.
    #[must_use]
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(MessageType, &str) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self.exit = false;
        self
    }

    #[must_use]
    pub const fn bold(&self) -> bool {
        self.bold
    }

    #[must_use]
    pub const fn italic(&self) -> bool {
        self.italic
    }

    #[must_use]
    pub const fn no_color(&self) -> bool {
        self.no_color
    }

    #[must_use]
    pub const fn no_icon(&self) -> bool {
        self.no_icon
    }

    #[must_use]
    pub const fn show_icons(&self) -> bool {
        self.show_icons
    }

    #[must_use]
    pub const fn no_style(&self) -> bool {
        self.no_style
    }

    #[must_use]
    pub const fn exit(&self) -> bool {
        self.exit
    }

    #[must_use]
    pub fn callback(&self) -> Option<&Callback> {
        self.callback.as_ref()
    }
}
