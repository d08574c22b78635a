//! Tests for diagnostic level parsing and ordering.

use termecho::Level;

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_display() {
    for level in Level::all() {
        assert_eq!(level.to_string(), level.as_str());
    }
    assert_eq!(Level::Warn.tag(), "[WARN ]");
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert!("loud".parse::<Level>().is_err());
}

#[test]
fn level_default_is_quiet() {
    assert_eq!(Level::default(), Level::Warn);
}
