//! `termecho` prints one styled message per invocation, so shell scripts get the same
//! colors, icons and JSON log as programs linking the library.
//!
//! Usage:
//!   termecho echo <type> <message...> [--bold] [--italic] [--icons] [--exit]
//!   termecho log <type> <message...>
//!   termecho types
//!   termecho icons

use clap::Parser;
use std::process::ExitCode;
use termecho::cli::{
    Cli, Command, apply_global_flags, cmd_echo, cmd_icons, cmd_log, cmd_types, load_config,
};
use termecho::internal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Diagnostics must be on before applying config so sink fallbacks are reported
    internal::init(config.parse_level());

    // A bad log target in config should not stop the message from printing
    if let Err(e) = config.apply() {
        internal::warn("CONFIG", &e.to_string());
    }
    apply_global_flags(&cli);

    match &cli.command {
        Command::Echo {
            kind,
            message,
            style,
            exit,
        } => cmd_echo(kind, message, style, *exit),
        Command::Log { kind, message } => cmd_log(kind, message),
        Command::Types { style } => cmd_types(style),
        Command::Icons => cmd_icons(),
    }
}
