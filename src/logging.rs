//! Logger setup for the server binary
//!
//! stdout carries the MCP stdio transport, so log records go either to a file or to
//! stderr, never to stdout.

use anyhow::{Context, Result};
use clap::ValueEnum;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;
use std::path::Path;

/// Verbosity accepted on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Install the global logger.
///
/// With `log_file`, records are appended to that file; otherwise they go to stderr.
pub fn init(level: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = LevelFilter::from(level);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            WriteLogger::init(level, config, file).context("Logger already initialised")?;
        }
        None => {
            TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
                .context("Logger already initialised")?;
        }
    }
    Ok(())
}
