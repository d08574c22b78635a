//! Structured mirror of every echoed message, kept apart from console output so a
//! broken log file can never affect what the user sees on stdout.

mod entry;
mod sink;

pub use entry::LogEntry;
pub use sink::{
    LogSink, SYSTEM_LOG_DIR, binary_name, close_log, global, is_logging_enabled, log_only,
    log_target, set_log_target, set_logging_enabled,
};
