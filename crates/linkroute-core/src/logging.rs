//! Tracing setup for the CLI.
//!
//! Records go to `$XDG_STATE_HOME/linkroute/linkroute.log`. When that file
//! can't be opened the caller switches to [`init_logging_stderr`].

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "linkroute.log";
const DEFAULT_FILTER: &str = "info,linkroute=debug,linkroute_core=debug";

/// Append-only log file shared by every event; each event gets its own handle.
struct AppendLog(File);

/// Per-event writer. Falls back to stderr if the file handle can't be duplicated.
enum LogSink {
    File(File),
    Stderr,
}

impl<'a> MakeWriter<'a> for AppendLog {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(file) => LogSink::File(file),
            Err(_) => LogSink::Stderr,
        }
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/linkroute/linkroute.log`; the directory is created if missing.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkroute")?;
    Ok(xdg_dirs.place_state_file(LOG_FILE)?)
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Installs the file subscriber. Errors leave no subscriber installed so the
/// caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    let file = open_append(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(AppendLog(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging to file");
    Ok(())
}

/// Stderr-only logging. A second install is silently ignored.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_sits_directly_under_state_dir() {
        let state = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_STATE_HOME", state.path());

        let path = log_path().unwrap();
        assert_eq!(path, state.path().join("linkroute").join("linkroute.log"));
        assert!(path.parent().unwrap().is_dir());

        let log = AppendLog(open_append(&path).unwrap());
        writeln!(log.make_writer(), "first").unwrap();
        let reopened = AppendLog(open_append(&path).unwrap());
        writeln!(reopened.make_writer(), "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
