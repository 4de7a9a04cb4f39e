//! Tracing setup: stderr always, plus an optional log file.

use roledoc_core::config::LoggingConfig;
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

// Keeps the file writer flushing until the process exits.
static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the global subscriber. `RUST_LOG` overrides the configured levels.
pub fn init(cfg: &LoggingConfig) -> io::Result<()> {
    let stderr_level = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter(stderr_level));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(path) = cfg.file.as_ref() else {
        registry.init();
        return Ok(());
    };

    let file_level = cfg
        .file_level
        .as_deref()
        .and_then(parse_level)
        .or_else(|| parse_level(&cfg.level))
        .unwrap_or(LevelFilter::DEBUG);

    let file = File::create(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter(file_level));

    registry.with(file_layer).init();
    Ok(())
}

/// Drop the file writer guard so buffered lines reach the log file.
pub fn shutdown() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
