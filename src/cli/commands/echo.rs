//! `termecho echo <type> <message...>`.

use crate::cli::StyleArgs;
use crate::cli::util::parse_kind;
use crate::echo::echo;
use std::process::ExitCode;

/// Error-class messages exit with failure so shell scripts can branch on them.
#[must_use]
pub fn cmd_echo(kind: &str, message: &[String], style: &StyleArgs, exit: bool) -> ExitCode {
    let kind = parse_kind(kind);
    let mut opts = style.to_options();
    if exit {
        opts = opts.with_exit();
    }

    match echo(kind, &message.join(" "), &opts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
