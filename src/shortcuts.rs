//! One function per message type and flavor, all forwarding to the dispatcher.
//!
//! ```no_run
//! use termecho::{Options, shortcuts};
//!
//! let opts = Options::new().with_icon();
//! shortcuts::success("Build finished", &opts);
//! let _ = shortcuts::get_warning("Cache is stale", &opts);
//! shortcuts::log_info("Only in the log file");
//! ```
//!
//! Formatted variants are the [`echo!`](crate::echo!) and [`log_only!`](crate::log_only!) macros.

use crate::echo::{SilentError, echo};
use crate::message::MessageType;
use crate::options::Options;
use crate::output::log_only;

macro_rules! message_shortcuts {
    ($($kind:ident => $print:ident, $get:ident, $log:ident;)+) => {
        $(
            #[doc = concat!("Prints a `", stringify!($print), "` message.")]
            pub fn $print(text: &str, opts: &Options) {
                let _ = echo(MessageType::$kind, text, opts);
            }

            #[doc = concat!(
                "Prints a `", stringify!($print), "` message and returns the dispatch result."
            )]
            ///
            /// # Errors
            /// [`SilentError`] if this type is error-class.
            pub fn $get(text: &str, opts: &Options) -> Result<String, SilentError> {
                echo(MessageType::$kind, text, opts)
            }

            #[doc = concat!(
                "Writes a `", stringify!($print), "` entry to the log without printing."
            )]
            pub fn $log(text: &str) {
                log_only(MessageType::$kind, text);
            }
        )+
    };
}

message_shortcuts! {
    Success => success, get_success, log_success;
    Error => error, get_error, log_error;
    Warning => warning, get_warning, log_warning;
    Info => info, get_info, log_info;
    Debug => debug, get_debug, log_debug;
    Critical => critical, get_critical, log_critical;
    Search => search, get_search, log_search;
    Sync => sync, get_sync, log_sync;
    Download => download, get_download, log_download;
    Refresh => refresh, get_refresh, log_refresh;
    Upload => upload, get_upload, log_upload;
    Delete => delete, get_delete, log_delete;
    Git => git, get_git, log_git;
    New => new, get_new, log_new;
    Edit => edit, get_edit, log_edit;
    Update => update, get_update, log_update;
    Generation => generation, get_generation, log_generation;
    Find => find, get_find, log_find;
    Link => link, get_link, log_link;
    Unlink => unlink, get_unlink, log_unlink;
    Upgrade => upgrade, get_upgrade, log_upgrade;
    Install => install, get_install, log_install;
    Font => font, get_font, log_font;
    Theme => theme, get_theme, log_theme;
    Icon => icon, get_icon, log_icon;
}

/// `format!`-style echo: `echo!(MessageType::Info, &opts, "loaded {} files", n)`.
///
/// Evaluates to the dispatcher's `Result<String, SilentError>`.
#[macro_export]
macro_rules! echo {
    ($kind:expr, $opts:expr, $($arg:tt)+) => {
        $crate::echo($kind, &::std::format!($($arg)+), $opts)
    };
}

/// `format!`-style log-only write: `log_only!(MessageType::Error, "code {}", code)`.
#[macro_export]
macro_rules! log_only {
    ($kind:expr, $($arg:tt)+) => {
        $crate::log_only($kind, &::std::format!($($arg)+))
    };
}
