//! Command-line interface for termecho, using Clap.

pub mod commands;
pub mod util;

use crate::fmt::IconMode;
use crate::options::Options;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Icon family for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum IconModeArg {
    None,
    Plain,
    Nerdfont,
}

impl From<IconModeArg> for IconMode {
    fn from(mode: IconModeArg) -> Self {
        match mode {
            IconModeArg::None => Self::None,
            IconModeArg::Plain => Self::Plain,
            IconModeArg::Nerdfont => Self::NerdFont,
        }
    }
}

/// termecho - Print styled, logged terminal messages.
#[derive(Parser)]
#[command(
    name = "termecho",
    version,
    about = "Print styled, logged terminal messages"
)]
pub struct Cli {
    /// Config file (default: ~/.config/termecho/termecho.conf)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Write the JSON log to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_target: Option<PathBuf>,
    /// Do not write the JSON log
    #[arg(long, global = true)]
    pub no_log: bool,
    /// Override the icon family
    #[arg(long, global = true, value_enum)]
    pub icon_mode: Option<IconModeArg>,
    #[command(subcommand)]
    pub command: Command,
}

/// Presentation flags shared by the printing subcommands.
#[derive(Debug, Clone, Default, Args)]
pub struct StyleArgs {
    /// Bold text
    #[arg(short, long)]
    pub bold: bool,
    /// Italic text
    #[arg(short, long)]
    pub italic: bool,
    /// No color escape
    #[arg(long)]
    pub no_color: bool,
    /// Ignore --bold and --italic
    #[arg(long)]
    pub no_style: bool,
    /// Prefix the message with its type's icon
    #[arg(long, conflicts_with = "no_icon")]
    pub icons: bool,
    /// Never print an icon
    #[arg(long)]
    pub no_icon: bool,
}

impl StyleArgs {
    #[must_use]
    pub fn to_options(&self) -> Options {
        let mut opts = Options::new();
        if self.bold {
            opts = opts.with_bold();
        }
        if self.italic {
            opts = opts.with_italic();
        }
        if self.no_color {
            opts = opts.without_color();
        }
        if self.no_style {
            opts = opts.without_style();
        }
        if self.icons {
            opts = opts.with_icon();
        }
        if self.no_icon {
            opts = opts.without_icon();
        }
        opts
    }
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a message and mirror it to the log.
    Echo {
        /// Message type (success, error, warning, info, ...)
        kind: String,
        /// Message text
        #[arg(required = true)]
        message: Vec<String>,
        #[command(flatten)]
        style: StyleArgs,
        /// Exit with status 1 right away for error-class types
        #[arg(long)]
        exit: bool,
    },
    /// Write a message to the log only.
    Log {
        /// Message type
        kind: String,
        /// Message text
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// List every message type with a rendered sample.
    Types {
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Show icon detection results and the glyphs of each family.
    Icons,
}

pub use commands::{cmd_echo, cmd_icons, cmd_log, cmd_types};
pub use util::{apply_global_flags, load_config, parse_kind};
