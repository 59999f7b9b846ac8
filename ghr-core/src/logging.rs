//! Subscriber setup for applications embedding the client.
//!
//! The client crates only emit `tracing` events (targets `ghr_api`,
//! `ghr_models`); nothing is printed until the embedding application
//! installs a subscriber with [`init_logging`] or [`init_console_logging`].
//! The HTTP stack underneath is capped at `warn` unless the filter names it.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{GhrError, GhrResult};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "GHR_LOG";

/// Crates below the client that are noisy at `debug`.
const TRANSPORT_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Where and how to write client logs.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Filter directive, e.g. `debug` or `ghr_api=trace,info`.
    pub level: String,
    /// Directory for the rotated request log; console only when `None`.
    pub directory: Option<PathBuf>,
    /// File name prefix inside `directory`.
    pub file_prefix: String,
    /// JSON lines instead of plain text in the file.
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "ghr-requests.log".to_string(),
            json: false,
        }
    }
}

impl LogSettings {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// The effective filter: `GHR_LOG` when set, else `level`, with the
    /// transport crates capped at `warn` unless already named.
    pub fn filter(&self) -> EnvFilter {
        let base = std::env::var(LOG_ENV).unwrap_or_else(|_| self.level.clone());
        EnvFilter::try_new(directives(&base)).unwrap_or_else(|_| EnvFilter::new(directives("info")))
    }
}

/// Append `target=warn` for each transport crate the directive leaves unnamed.
fn directives(base: &str) -> String {
    let mut out = base.trim().to_string();
    for target in TRANSPORT_TARGETS {
        let named = out
            .split(',')
            .any(|d| d.split('=').next().map(str::trim) == Some(*target));
        if !named {
            if !out.is_empty() {
                out.push(',');
            }
            out.push_str(target);
            out.push_str("=warn");
        }
    }
    out
}

/// Keeps the background file writer alive; dropping it flushes the file.
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// Install the global subscriber: a compact stderr layer and, when a
/// directory is set, a daily-rotated file with source locations.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(settings: &LogSettings) -> GhrResult<LogGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let mut worker = None;
    let mut text_file = None;
    let mut json_file = None;
    if let Some(dir) = &settings.directory {
        std::fs::create_dir_all(dir)?;
        let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, &settings.file_prefix));
        worker = Some(guard);
        if settings.json {
            json_file = Some(
                fmt::layer()
                    .with_writer(writer)
                    .json()
                    .with_file(true)
                    .with_line_number(true),
            );
        } else {
            text_file = Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true),
            );
        }
    }

    tracing_subscriber::registry()
        .with(settings.filter())
        .with(console)
        .with(text_file)
        .with(json_file)
        .try_init()
        .map_err(|e| GhrError::Config(format!("failed to install subscriber: {e}")))?;

    tracing::debug!(
        level = %settings.level,
        file = ?settings.directory.as_ref().map(|d| d.join(&settings.file_prefix)),
        "client logging initialized"
    );

    Ok(LogGuard { _worker: worker })
}

/// Console-only subscriber for tests and interactive debugging.
/// Does nothing if a subscriber is already installed.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(LogSettings::new(level).filter())
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).compact())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_targets_capped() {
        assert_eq!(
            directives("debug"),
            "debug,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn"
        );
    }

    #[test]
    fn test_named_targets_left_alone() {
        let d = directives("ghr_api=trace,reqwest=debug");
        assert!(d.starts_with("ghr_api=trace,reqwest=debug,hyper=warn"));
        assert_eq!(d.matches("reqwest").count(), 1);
    }

    #[test]
    fn test_settings_builder() {
        let s = LogSettings::new("debug")
            .with_directory("/tmp/ghr-logs")
            .with_file_prefix("api.log")
            .with_json(true);
        assert_eq!(s.level, "debug");
        assert_eq!(s.directory.as_deref(), Some(std::path::Path::new("/tmp/ghr-logs")));
        assert_eq!(s.file_prefix, "api.log");
        assert!(s.json);
        assert!(LogSettings::default().directory.is_none());
    }

    #[test]
    fn test_console_logging_is_idempotent() {
        init_console_logging("debug");
        init_console_logging("not a valid directive ===");
    }
}
