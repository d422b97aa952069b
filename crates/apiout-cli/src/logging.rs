// Rust guideline compliant 2026-10-16

//! Tracing setup for the CLI.
//!
//! Rendered responses go to stdout, so log events are written as JSON to
//! stderr or to a log file.

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};

/// Logging options taken from the command line.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Logging level.
    pub log_level: String,
    /// Optional log file path.
    pub log_file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Events go to `log_file` when one is set and to stderr otherwise.
///
/// # Returns
///
/// A guard that must be held until exit when logging to a file.
///
/// # Errors
///
/// Returns an error if the level is unknown, the log file cannot be opened,
/// or a global subscriber is already installed.
pub fn init_tracing(options: &LogOptions) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&options.log_level)?;
    let (writer, guard) = log_writer(options.log_file.as_deref())?;

    let subscriber = fmt::fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("a tracing subscriber is already installed")?;
    Ok(guard)
}

/// Picks the sink for log events.
fn log_writer(path: Option<&Path>) -> Result<(BoxMakeWriter, Option<WorkerGuard>)> {
    let Some(path) = path else {
        return Ok((BoxMakeWriter::new(std::io::stderr), None));
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    Ok((BoxMakeWriter::new(writer), Some(guard)))
}

/// Parses a log level name, ignoring case.
///
/// # Errors
///
/// Returns an error unless `level` is one of `error`, `warn`, `info`,
/// `debug` or `trace`.
pub fn parse_log_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| anyhow!("Invalid log level: {level}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        let err = parse_log_level("loud").unwrap_err();
        assert_eq!(err.to_string(), "Invalid log level: loud");
    }

    #[test]
    fn test_log_writer_targets() {
        let (_, guard) = log_writer(None).unwrap();
        assert!(guard.is_none());

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("apiout.log");
        let (writer, guard) = log_writer(Some(&path)).unwrap();
        assert!(guard.is_some());
        writer.make_writer().write_all(b"{}\n").unwrap();
        drop(guard);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");

        let missing = dir.path().join("no-such-dir").join("apiout.log");
        let err = log_writer(Some(&missing)).unwrap_err();
        assert!(err.to_string().starts_with("cannot open log file"));
    }
}
