//! `termecho log <type> <message...>`: structured log entry without console output.

use crate::cli::util::parse_kind;
use crate::internal;
use crate::output;
use std::process::ExitCode;

#[must_use]
pub fn cmd_log(kind: &str, message: &[String]) -> ExitCode {
    if !output::is_logging_enabled() {
        internal::warn("CLI", "Logging is disabled, nothing written");
        return ExitCode::FAILURE;
    }
    output::log_only(parse_kind(kind), &message.join(" "));
    ExitCode::SUCCESS
}
