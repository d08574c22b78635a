//! `termecho icons`: what detection concluded and what each family looks like.

use crate::fmt::{IconMode, icon};
use crate::message::MessageType;
use std::process::ExitCode;

#[must_use]
pub fn cmd_icons() -> ExitCode {
    let detected = icon::is_nerd_font_detected();
    println!(
        "Nerd Font detected: {}",
        if detected { "yes" } else { "no" }
    );
    println!("Current icon mode:  {}", icon::current_icon_mode());
    println!(
        "Set {}=true to use Nerd Font glyphs by default",
        icon::NERD_FONT_ENV
    );
    println!();

    for kind in MessageType::all() {
        println!(
            "  {:<12}{:<6}{}",
            kind.as_str(),
            icon::glyph(kind, IconMode::Plain),
            icon::glyph(kind, IconMode::NerdFont)
        );
    }
    ExitCode::SUCCESS
}
