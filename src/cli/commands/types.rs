//! `termecho types`: the catalog, rendered with the active colors and icons.

use crate::cli::StyleArgs;
use crate::echo::render;
use crate::message::MessageType;
use std::process::ExitCode;

#[must_use]
pub fn cmd_types(style: &StyleArgs) -> ExitCode {
    let opts = style.to_options();
    for kind in MessageType::all() {
        let marker = if kind.is_error_class() {
            "  (error-class)"
        } else {
            ""
        };
        println!(
            "  {:<12}{}{marker}",
            kind.as_str(),
            render(kind, kind.as_str(), &opts)
        );
    }
    ExitCode::SUCCESS
}
