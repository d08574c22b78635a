//! End-to-end tests of the `termecho` binary.
#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    let missing_config = dir.join("no-such.conf");
    Command::new(env!("CARGO_BIN_EXE_termecho"))
        .arg("--config")
        .arg(&missing_config)
        .args(args)
        .current_dir(dir)
        .env_remove("NERD_FONT_ENABLED")
        .output()
        .expect("failed to run termecho")
}

#[test]
fn echo_prints_and_logs() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("cli.log");

    let output = run(
        tmp.path(),
        &["echo", "success", "all", "good", "--log-target", log.to_str().unwrap()],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("all good"));

    let content = fs::read_to_string(&log).unwrap();
    let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(entry["message"], "all good");
    assert_eq!(entry["binary"], "termecho");
}

#[test]
fn error_class_exits_with_failure() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["--no-log", "echo", "error", "broken"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("broken"));
}

#[test]
fn exit_flag_terminates_with_status_one() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("exit.log");

    let output = run(
        tmp.path(),
        &[
            "echo",
            "critical",
            "fatal",
            "--exit",
            "--log-target",
            log.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("fatal"));
    assert!(fs::read_to_string(&log).unwrap().contains("\"fatal\""));
}

#[test]
fn plain_icons_with_flag() {
    let tmp = TempDir::new().unwrap();
    let output = run(
        tmp.path(),
        &["--no-log", "--icon-mode", "plain", "echo", "success", "ok", "--icons"],
    );

    assert!(String::from_utf8_lossy(&output.stdout).contains("✅ ok"));
}

#[test]
fn unknown_type_falls_back_to_default() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["--no-log", "echo", "sparkle", "shiny"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("shiny"));
}

#[test]
fn log_only_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("quiet.log");

    let output = run(
        tmp.path(),
        &["log", "info", "hidden", "--log-target", log.to_str().unwrap()],
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(fs::read_to_string(&log).unwrap().contains("hidden"));
}

#[test]
fn types_lists_catalog() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["--no-log", "types"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 26);
    assert!(stdout.contains("(error-class)"));
}

#[test]
fn unwritable_log_target_still_prints() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let target = blocker.join("x.log");

    let output = run(
        tmp.path(),
        &["echo", "info", "visible", "--log-target", target.to_str().unwrap()],
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("visible"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("x.log"));
}

#[test]
fn log_with_logging_disabled_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["--no-log", "log", "info", "dropped"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Logging is disabled"));
    assert!(fs::read_dir(tmp.path()).unwrap().next().is_none());
}
