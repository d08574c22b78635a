//! Each subcommand lives in its own file so the match in main stays thin.

mod echo;
mod icons;
mod log;
mod types;

pub use echo::cmd_echo;
pub use icons::cmd_icons;
pub use log::cmd_log;
pub use types::cmd_types;
