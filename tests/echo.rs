//! Tests for the dispatch pipeline.
//!
//! Icon mode, color overrides and the sink are process-wide, so every test takes the
//! state lock and resets what it depends on.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use termecho::fmt::color;
use termecho::{IconMode, MessageType, Options};

static STATE: Mutex<()> = Mutex::new(());

fn lock_state() -> MutexGuard<'static, ()> {
    let guard = STATE.lock().unwrap_or_else(PoisonError::into_inner);
    termecho::set_logging_enabled(false);
    termecho::clear_color_overrides();
    termecho::force_plain_icons();
    guard
}

fn echo_captured(
    kind: MessageType,
    text: &str,
    opts: &Options,
) -> (String, Result<String, termecho::SilentError>) {
    let mut out = Vec::new();
    let result = termecho::echo_to(&mut out, kind, text, opts);
    (String::from_utf8(out).unwrap(), result)
}

fn option_combinations() -> Vec<Options> {
    let mut all = Vec::new();
    for bits in 0u8..64 {
        let mut opts = Options::new();
        if bits & 1 != 0 {
            opts = opts.with_bold();
        }
        if bits & 2 != 0 {
            opts = opts.with_italic();
        }
        if bits & 4 != 0 {
            opts = opts.without_color();
        }
        if bits & 8 != 0 {
            opts = opts.without_style();
        }
        if bits & 16 != 0 {
            opts = opts.with_icon();
        }
        if bits & 32 != 0 {
            opts = opts.without_icon();
        }
        all.push(opts);
    }
    all
}

#[test]
fn every_type_and_option_prints_the_text() {
    let _state = lock_state();
    for kind in MessageType::all() {
        for opts in option_combinations() {
            let (printed, _) = echo_captured(kind, "x", &opts);
            assert!(printed.contains('x'), "{kind} {opts:?}");
            assert!(printed.ends_with(&format!("{}\n", color::RESET)));
        }
    }
}

#[test]
fn error_class_returns_silent_error() {
    let _state = lock_state();
    for kind in MessageType::all() {
        let (_, result) = echo_captured(kind, "payload", &Options::new());
        if kind.is_error_class() {
            let err = result.unwrap_err();
            assert_eq!(err.text(), "payload");
            assert_eq!(err.kind(), kind);
        } else {
            assert_eq!(result.unwrap(), "payload");
        }
    }
}

#[test]
fn debug_returns_silent_error_too() {
    let _state = lock_state();
    let (_, result) = echo_captured(MessageType::Debug, "trace me", &Options::new());
    assert!(result.is_err(), "debug is error-class");
}

#[test]
fn composition_order() {
    let _state = lock_state();
    let opts = Options::new().with_bold().with_italic().with_icon();
    let line = termecho::render(MessageType::Success, "ok", &opts);
    assert_eq!(
        line,
        format!(
            "{}{}{}✅ ok{}",
            color::BOLD,
            color::ITALIC,
            color::GREEN,
            color::RESET
        )
    );
}

#[test]
fn plain_icon_directly_precedes_text() {
    let _state = lock_state();
    let (printed, _) = echo_captured(MessageType::Success, "ok", &Options::new().with_icon());
    assert!(printed.contains("✅ ok"));
}

#[test]
fn nerd_font_icons_when_forced() {
    let _state = lock_state();
    termecho::force_nerd_font();
    let line = termecho::render(MessageType::Error, "bad", &Options::new().with_icon());
    assert!(line.contains("\u{f00d} bad"));
}

#[test]
fn disabled_icons_override_with_icon() {
    let _state = lock_state();
    termecho::disable_icons();
    let line = termecho::render(
        MessageType::Success,
        "ok",
        &Options::new().with_icon().without_color(),
    );
    assert_eq!(line, format!("ok{}", color::RESET));
}

#[test]
fn icons_are_opt_in() {
    let _state = lock_state();
    let line = termecho::render(MessageType::Success, "ok", &Options::new().without_color());
    assert_eq!(line, format!("ok{}", color::RESET));
}

#[test]
fn icon_forcing_is_idempotent() {
    let _state = lock_state();
    for _ in 0..2 {
        termecho::force_nerd_font();
        assert_eq!(termecho::current_icon_mode(), IconMode::NerdFont);
    }
    for _ in 0..2 {
        termecho::force_plain_icons();
        assert_eq!(termecho::current_icon_mode(), IconMode::Plain);
    }
    for _ in 0..2 {
        termecho::disable_icons();
        assert_eq!(termecho::current_icon_mode(), IconMode::None);
    }
}

#[test]
fn reinit_follows_the_supplied_environment() {
    let _state = lock_state();
    termecho::fmt::icon::reinit_with(|key| (key == "NERD_FONT_ENABLED").then(|| "1".to_string()));
    assert_eq!(termecho::current_icon_mode(), IconMode::NerdFont);
    assert!(termecho::is_nerd_font_detected());

    termecho::fmt::icon::reinit_with(|_| None);
    assert_eq!(termecho::current_icon_mode(), IconMode::Plain);
    assert!(!termecho::is_nerd_font_detected());
}

#[test]
fn color_override_round_trip() {
    let _state = lock_state();
    termecho::set_color_overrides([("success", "X")]);
    assert_eq!(termecho::resolve_color(MessageType::Success), "X");
    let line = termecho::render(MessageType::Success, "ok", &Options::new());
    assert!(line.starts_with("Xok"));

    termecho::clear_color_overrides();
    assert_eq!(termecho::resolve_color(MessageType::Success), color::GREEN);
}

#[test]
fn no_color_ignores_overrides() {
    let _state = lock_state();
    termecho::set_color_overrides([("info", "Y")]);
    let line = termecho::render(MessageType::Info, "hi", &Options::new().without_color());
    assert!(!line.contains('Y'));
}

#[test]
fn callback_receives_type_and_raw_text() {
    let _state = lock_state();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let opts = Options::new()
        .with_bold()
        .with_callback(move |kind, text| sink.lock().unwrap().push((kind, text.to_string())));

    let (_, result) = echo_captured(MessageType::Critical, "meltdown", &opts);

    assert!(result.is_err());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(MessageType::Critical, "meltdown".to_string())]
    );
}

#[test]
fn exit_flag_is_ignored_for_non_error_types() {
    let _state = lock_state();
    let opts = Options::new().with_exit();
    let (printed, result) = echo_captured(MessageType::Warning, "still here", &opts);
    assert!(printed.contains("still here"));
    assert_eq!(result.unwrap(), "still here");
}

#[test]
fn format_macro() {
    let _state = lock_state();
    let result = termecho::echo!(MessageType::Info, &Options::new(), "loaded {} files", 3);
    assert_eq!(result.unwrap(), "loaded 3 files");
}

#[test]
fn shortcut_get_forwards_to_dispatch() {
    let _state = lock_state();
    assert_eq!(
        termecho::shortcuts::get_install("pkg", &Options::new()).unwrap(),
        "pkg"
    );
    let err = termecho::shortcuts::get_error("nope", &Options::new()).unwrap_err();
    assert_eq!(err.into_text(), "nope");
}

#[test]
fn overrides_merge_into_the_global_table() {
    let _state = lock_state();
    termecho::set_color_overrides([("success", "A"), ("error", "B")]);
    termecho::set_color_overrides([("success", "C")]);

    assert_eq!(color::global().override_count(), 2);
    assert_eq!(termecho::resolve_color(MessageType::Success), "C");

    termecho::clear_color_overrides();
    assert_eq!(color::global().override_count(), 0);
}
