//! Logging for one `wsc` run: appends to the XDG state log, or stderr when
//! the state dir is unusable.

use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,wsc=debug,wsc_core=debug";
const LOG_FILE_NAME: &str = "wsc.log";

/// Where log lines of this run end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSink::File(path) => write!(f, "{}", path.display()),
            LogSink::Stderr => f.write_str("stderr"),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file() -> Result<(PathBuf, File)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wsc")?;
    let path = xdg_dirs
        .place_state_file(LOG_FILE_NAME)
        .context("create log directory")?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((path, file))
}

fn install<W>(writer: W) -> Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))
}

/// First line logged by every run.
pub fn startup_message(command: &str, sink: &LogSink) -> String {
    format!(
        "wsc {} {command}: logging to {sink}",
        env!("CARGO_PKG_VERSION")
    )
}

/// Installs the global subscriber for `wsc <command>` and logs the startup line.
///
/// Logs go to `~/.local/state/wsc/wsc.log`. If that file cannot be opened the
/// run logs to stderr instead. Fails only if a subscriber is already installed.
pub fn init_logging(command: &str) -> Result<LogSink> {
    let sink = match open_log_file() {
        Ok((path, file)) => {
            install(Mutex::new(file))?;
            LogSink::File(path)
        }
        Err(err) => {
            install(std::io::stderr)?;
            tracing::warn!("log file unavailable: {err:#}");
            LogSink::Stderr
        }
    };
    tracing::info!(command, "{}", startup_message(command, &sink));
    Ok(sink)
}
