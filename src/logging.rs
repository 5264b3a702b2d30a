//! Logging setup for anonboard.
//!
//! `logging.level` is either a bare level (`debug`) or a full filter
//! directive (`info,tower_http=debug`). `RUST_LOG` is read first and the
//! configured value is layered on top.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::{BoardError, Result};

fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn is_directive(level: &str) -> bool {
    level.contains('=') || level.contains(',')
}

/// Build the filter for a configured level or directive string.
fn build_filter(level: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    if !is_directive(level) {
        return filter.add_directive(parse_level(level).into());
    }

    level
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .fold(filter, |filter, directive| match directive.parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(e) => {
                eprintln!("Ignoring log directive {directive:?}: {e}");
                filter
            }
        })
}

fn ensure_parent_dir(file: &str) -> Result<()> {
    match Path::new(file).parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Initialize logging to stdout and the configured log file.
///
/// The file is appended to, so restarts keep earlier board activity.
pub fn init(config: &LoggingConfig) -> Result<()> {
    ensure_parent_dir(&config.file)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;
    let writer = std::io::stdout.and(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(build_filter(&config.level))
        .try_init()
        .map_err(|e| BoardError::Config(format!("logging already initialized: {e}")))
}

/// Initialize console-only logging.
///
/// Used when the log file cannot be opened. Does nothing if a subscriber
/// is already installed.
pub fn init_console_only(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(true)
                .with_target(true),
        )
        .with(build_filter(level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        let cases = [
            ("trace", Level::TRACE),
            ("DEBUG", Level::DEBUG),
            ("info", Level::INFO),
            ("warning", Level::WARN),
            (" Warn ", Level::WARN),
            ("error", Level::ERROR),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_level(input), expected, "level {input:?}");
        }
    }

    #[test]
    fn test_parse_level_falls_back_to_info() {
        assert_eq!(parse_level("verbose"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_is_directive() {
        assert!(!is_directive("debug"));
        assert!(is_directive("info,tower_http=debug"));
        assert!(is_directive("anonboard=trace"));
    }

    #[test]
    fn test_build_filter_accepts_directives() {
        let filter = build_filter("info,tower_http=debug");
        let rendered = filter.to_string();
        assert!(rendered.contains("tower_http=debug"));
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested/logs/anonboard.log");

        ensure_parent_dir(file.to_str().unwrap()).unwrap();
        assert!(dir.path().join("nested/logs").is_dir());

        // A bare file name has no directory to create.
        ensure_parent_dir("anonboard.log").unwrap();
    }
}
