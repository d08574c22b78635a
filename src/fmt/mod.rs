//! Presentation fragments for a message line: colors, style escapes and icons.

pub mod color;
pub mod icon;

pub use color::{Color, ColorTable, clear_color_overrides, resolve_color, set_color_overrides};
pub use icon::{
    IconMode, current_icon_mode, detect, detect_with, disable_icons, force_nerd_font,
    force_plain_icons, glyph, is_nerd_font_detected, set_icon_mode,
};
