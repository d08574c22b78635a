//! Append-only JSON-lines sink with a resilient startup policy.
//!
//! The sink owns its file handle exclusively. Every failure either degrades (fallback
//! path, fallback line format) or disables the sink; nothing here can make an echo fail.

use super::LogEntry;
use crate::internal;
use crate::message::MessageType;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

/// Directory of the first-choice startup target, `<dir>/<binary>.log`.
pub const SYSTEM_LOG_DIR: &str = "/var/log";

const FALLBACK_BINARY_NAME: &str = "termecho";

/// Base name of the running executable as invoked, used for file names and the `binary` field.
#[must_use]
pub fn binary_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_BINARY_NAME.to_string())
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[derive(Debug)]
struct SinkState {
    target: PathBuf,
    file: Option<File>,
    enabled: bool,
    /// False until the startup policy ran or a caller configured the sink explicitly.
    initialized: bool,
}

impl SinkState {
    /// Startup policy: the current target, then `fallback`, then give up and disable.
    fn initialize(&mut self, fallback: &Path) {
        self.initialized = true;
        if !self.enabled {
            return;
        }

        match open_append(&self.target) {
            Ok(file) => {
                internal::debug("SINK", &format!("Logging to {}", self.target.display()));
                self.file = Some(file);
            }
            Err(e) => {
                internal::warn(
                    "SINK",
                    &format!(
                        "Cannot open {} ({e}), trying {}",
                        self.target.display(),
                        fallback.display()
                    ),
                );
                match open_append(fallback) {
                    Ok(file) => {
                        self.target = fallback.to_path_buf();
                        self.file = Some(file);
                    }
                    Err(e) => {
                        internal::warn("SINK", &format!("Logging disabled: {e}"));
                        self.enabled = false;
                        self.file = None;
                    }
                }
            }
        }
    }

    fn release(&mut self) {
        self.file = None;
    }
}

#[derive(Debug)]
pub struct LogSink {
    binary: String,
    fallback: PathBuf,
    state: Mutex<SinkState>,
}

impl LogSink {
    /// Sink for `binary` with the standard startup targets: `/var/log/<binary>.log`,
    /// falling back to `<binary>.log` in the working directory. Nothing is opened yet.
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        let binary = binary.into();
        let primary = Path::new(SYSTEM_LOG_DIR).join(format!("{binary}.log"));
        let fallback = PathBuf::from(format!("{binary}.log"));
        Self::with_paths(binary, primary, fallback)
    }

    /// Sink with explicit startup targets, for hosts that keep logs elsewhere.
    #[must_use]
    pub fn with_paths(
        binary: impl Into<String>,
        primary: impl Into<PathBuf>,
        fallback: impl Into<PathBuf>,
    ) -> Self {
        Self {
            binary: binary.into(),
            fallback: fallback.into(),
            state: Mutex::new(SinkState {
                target: primary.into(),
                file: None,
                enabled: true,
                initialized: false,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn binary_name(&self) -> &str {
        &self.binary
    }

    /// Appends one entry. Runs the startup policy on first use; a no-op while disabled.
    pub fn write(&self, kind: MessageType, text: &str) {
        let mut state = self.state();
        if !state.initialized {
            state.initialize(&self.fallback);
        }
        if !state.enabled {
            return;
        }
        let Some(file) = state.file.as_mut() else {
            return;
        };

        let line = LogEntry::new(kind, text, &self.binary).to_line();
        if let Err(e) = file.write_all(line.as_bytes()) {
            internal::trace("SINK", &format!("Write failed: {e}"));
        }
    }

    /// Switches to `path`. A leading `~` is expanded when the path is valid UTF-8;
    /// anything else is opened exactly as given. On failure the sink is disabled,
    /// keeps its previous target, and the error names the attempted path.
    ///
    /// # Errors
    /// [`crate::Error::LogTarget`] if the directory cannot be created or the file opened.
    pub fn set_target(&self, path: impl AsRef<Path>) -> Result<(), crate::Error> {
        let path = path.as_ref();
        let path = match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
            None => path.to_path_buf(),
        };

        let mut state = self.state();
        state.release();
        state.initialized = true;

        match open_append(&path) {
            Ok(file) => {
                internal::info("SINK", &format!("Log target set to {}", path.display()));
                state.file = Some(file);
                state.target = path;
                state.enabled = true;
                Ok(())
            }
            Err(source) => {
                internal::error(
                    "SINK",
                    &format!("Cannot use log target {}: {source}", path.display()),
                );
                state.enabled = false;
                Err(crate::Error::LogTarget { path, source })
            }
        }
    }

    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.state().target.clone()
    }

    /// Disabling releases the file. Enabling without an open file re-runs the startup
    /// policy against the last known target.
    pub fn set_enabled(&self, enabled: bool) {
        let mut state = self.state();
        state.enabled = enabled;
        if enabled {
            if state.file.is_none() {
                state.initialize(&self.fallback);
            }
        } else {
            state.initialized = true;
            state.release();
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state().enabled
    }

    /// Releases the file handle. Writes are dropped until the target is set or the
    /// sink is re-enabled. Safe to call repeatedly.
    pub fn close(&self) {
        let mut state = self.state();
        state.initialized = true;
        state.release();
    }
}

static SINK: LazyLock<LogSink> = LazyLock::new(|| LogSink::new(binary_name()));

/// The process-wide sink used by the dispatcher.
#[must_use]
pub fn global() -> &'static LogSink {
    &SINK
}

/// Writes to the log without printing anything.
pub fn log_only(kind: MessageType, text: &str) {
    global().write(kind, text);
}

/// # Errors
/// [`crate::Error::LogTarget`] if the target cannot be created or opened.
pub fn set_log_target(path: impl AsRef<Path>) -> Result<(), crate::Error> {
    global().set_target(path)
}

#[must_use]
pub fn log_target() -> PathBuf {
    global().target()
}

pub fn set_logging_enabled(enabled: bool) {
    global().set_enabled(enabled);
}

#[must_use]
pub fn is_logging_enabled() -> bool {
    global().is_enabled()
}

pub fn close_log() {
    global().close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn startup_uses_primary_when_writable() {
        let tmp = TempDir::new().unwrap();
        let primary = tmp.path().join("var").join("app.log");
        let sink = LogSink::with_paths("app", &primary, tmp.path().join("fallback.log"));

        sink.write(MessageType::Info, "first");

        assert_eq!(sink.target(), primary);
        assert!(fs::read_to_string(&primary).unwrap().contains("first"));
    }

    #[test]
    fn startup_falls_back_when_primary_unusable() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let fallback = tmp.path().join("app.log");
        let sink = LogSink::with_paths("app", blocker.join("app.log"), &fallback);

        sink.write(MessageType::Info, "via fallback");

        assert!(sink.is_enabled());
        assert_eq!(sink.target(), fallback);
        assert!(
            fs::read_to_string(&fallback)
                .unwrap()
                .contains("via fallback")
        );
    }

    #[test]
    fn startup_disables_when_both_fail() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let sink = LogSink::with_paths("app", blocker.join("a.log"), blocker.join("b.log"));

        sink.write(MessageType::Info, "lost");

        assert!(!sink.is_enabled());
    }

    #[test]
    fn explicit_target_skips_startup_policy() {
        let tmp = TempDir::new().unwrap();
        let primary = tmp.path().join("primary.log");
        let chosen = tmp.path().join("chosen.log");
        let sink = LogSink::with_paths("app", &primary, tmp.path().join("fallback.log"));

        sink.set_target(&chosen).unwrap();
        sink.write(MessageType::Success, "hi");

        assert!(!primary.exists());
        assert!(chosen.exists());
    }

    #[test]
    fn failed_target_keeps_previous_path_and_disables() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.log");
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let sink = LogSink::with_paths("app", &good, tmp.path().join("fallback.log"));

        sink.set_target(&good).unwrap();
        let err = sink.set_target(blocker.join("x.log")).unwrap_err();

        let attempted = blocker.join("x.log");
        assert!(matches!(err, crate::Error::LogTarget { ref path, .. } if *path == attempted));
        assert!(!sink.is_enabled());
        assert_eq!(sink.target(), good);

        sink.set_enabled(true);
        assert!(sink.is_enabled());
        sink.write(MessageType::Info, "back");
        assert!(fs::read_to_string(&good).unwrap().contains("back"));
    }

    #[test]
    fn close_is_idempotent_and_stops_writes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("closed.log");
        let sink = LogSink::with_paths("app", &path, tmp.path().join("fallback.log"));

        sink.set_target(&path).unwrap();
        sink.close();
        sink.close();
        sink.write(MessageType::Info, "dropped");

        assert!(!fs::read_to_string(&path).unwrap().contains("dropped"));
    }

    #[test]
    fn disabling_before_first_write_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let primary = tmp.path().join("never.log");
        let sink = LogSink::with_paths("app", &primary, tmp.path().join("fallback.log"));

        sink.set_enabled(false);
        sink.write(MessageType::Info, "nothing");

        assert!(!primary.exists());
    }
}
