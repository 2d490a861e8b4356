//! Tracing subscriber setup.
//!
//! Logs go to stderr (or the configured file) so command output on stdout
//! stays clean. `RUST_LOG` wins over the configured level.

use super::config::LoggingConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to the configured level.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact();

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file '{}': {}", path.display(), e))?;

            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }

    Ok(())
}
