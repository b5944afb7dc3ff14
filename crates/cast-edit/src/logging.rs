//! Logging setup.
//!
//! The library only emits `tracing` events; binaries call [`init_logging`]
//! once to install a subscriber that writes to stderr.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, LoggingConfig};

/// Errors installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level filter could not be parsed.
    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidFilter {
        /// The rejected filter.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// Subscriber initialization failed.
    #[error("failed to initialize log subscriber")]
    SubscriberInit,
}

/// Build the level filter. `RUST_LOG` wins over the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| LoggingError::InvalidFilter {
        filter: config.level.clone(),
        reason: e.to_string(),
    })
}

/// Install a global subscriber for the given configuration.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|_| LoggingError::SubscriberInit)
}

/// Raise `base` by a `-v` count: `-v` info, `-vv` debug, `-vvv` trace.
///
/// A plain level in `base` that is already more verbose is kept. A filter
/// with directives (`cast_edit=debug,warn`) keeps its directives and gets
/// the requested level as the new default.
#[must_use]
pub fn verbosity_level(base: &str, verbose: u8) -> String {
    let requested = match verbose {
        0 => return base.to_string(),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    match base.trim().parse::<LevelFilter>() {
        Ok(level) => level.max(requested).to_string().to_lowercase(),
        Err(_) if base.trim().is_empty() => requested.to_string().to_lowercase(),
        Err(_) => {
            let directives: Vec<&str> = base
                .split(',')
                .map(str::trim)
                .filter(|d| d.contains('='))
                .collect();
            let default = base
                .split(',')
                .map(str::trim)
                .filter(|d| !d.contains('='))
                .find_map(|d| d.parse::<LevelFilter>().ok())
                .map_or(requested, |level| level.max(requested));
            let mut filter = default.to_string().to_lowercase();
            for directive in directives {
                filter.push(',');
                filter.push_str(directive);
            }
            filter
        }
    }
}
