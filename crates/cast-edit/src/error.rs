//! Error types for cast-edit.
//!
//! Range problems, unreadable recordings and bad configuration are kept in
//! separate enums so callers can tell a mistyped `-s` pair apart from a
//! corrupt input file. [`EditError`] unifies them for the top-level pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::range::Range;

/// The main error type for cast-edit operations.
#[derive(Debug, Error)]
pub enum EditError {
    /// The requested ranges are inconsistent.
    #[error("invalid range selection: {0}")]
    Range(#[from] RangeError),

    /// The recording could not be read or written.
    #[error(transparent)]
    Recording(#[from] RecordingError),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Problems with a caller-supplied range selection.
///
/// Every variant carries the offending values so the message is enough to
/// fix the command line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// No ranges were supplied.
    #[error("no ranges given; specify at least one section like `-s 0 5`")]
    EmptyRangeSet,

    /// A range starts before zero.
    #[error("range {range} starts before 0")]
    NegativeStart {
        /// The offending range.
        range: Range,
    },

    /// A range has a fixed stop below zero.
    #[error("range {range} stops before 0")]
    NegativeStop {
        /// The offending range.
        range: Range,
    },

    /// A fixed stop is not strictly after its start.
    #[error("range {range} must stop after it starts")]
    StopNotAfterStart {
        /// The offending range.
        range: Range,
    },

    /// A range starts before the previous range (in start order) stops.
    #[error("range {range} overlaps a previous range that stops at {previous_stop}")]
    RangeOverlap {
        /// The offending range.
        range: Range,
        /// Stop of the range it collides with.
        previous_stop: f64,
    },

    /// An end-of-recording stop was used on a range that is not the latest.
    #[error(
        "range {range} runs to the end of the recording but a later range starts at {next_start}; \
         only the last section may use an open stop"
    )]
    SentinelNotLast {
        /// The offending range.
        range: Range,
        /// Start of the range that follows it.
        next_start: f64,
    },

    /// An open-ended range starts after the last event of the recording.
    #[error("range {range} starts after the recording ends at {end}")]
    StartPastEnd {
        /// The offending range.
        range: Range,
        /// Timestamp of the last event.
        end: f64,
    },

    /// A bound is NaN or infinite.
    #[error("range bound {value} is not a finite number")]
    NonFinite {
        /// The offending value.
        value: f64,
    },
}

/// Errors reading or writing a recording.
#[derive(Debug, Error)]
pub enum RecordingError {
    /// An I/O error with context.
    #[error("{context}: {source}")]
    Io {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input contained no header line.
    #[error("recording is empty: expected a header line")]
    MissingHeader,

    /// The header line is not a JSON object.
    #[error("invalid recording header: {reason}")]
    InvalidHeader {
        /// Why the header was rejected.
        reason: String,
    },

    /// An event line could not be decoded.
    #[error("invalid event on line {line}: {reason}")]
    InvalidEvent {
        /// 1-based line number in the input.
        line: usize,
        /// Why the event was rejected.
        reason: String,
    },

    /// An event could not be encoded.
    #[error("failed to encode recording: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected schema.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// A setting has an unusable value.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Setting name.
        key: String,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type alias for cast-edit operations.
pub type Result<T> = std::result::Result<T, EditError>;

impl EditError {
    /// Check if this is a range validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// Get the range error, if this is one.
    #[must_use]
    pub const fn as_range_error(&self) -> Option<&RangeError> {
        match self {
            Self::Range(err) => Some(err),
            _ => None,
        }
    }
}

impl RangeError {
    /// Create an overlap error.
    #[must_use]
    pub const fn overlap(range: Range, previous_stop: f64) -> Self {
        Self::RangeOverlap {
            range,
            previous_stop,
        }
    }

    /// Get the range this error is about, if any.
    #[must_use]
    pub const fn range(&self) -> Option<&Range> {
        match self {
            Self::NegativeStart { range }
            | Self::NegativeStop { range }
            | Self::StopNotAfterStart { range }
            | Self::RangeOverlap { range, .. }
            | Self::SentinelNotLast { range, .. }
            | Self::StartPastEnd { range, .. } => Some(range),
            Self::EmptyRangeSet | Self::NonFinite { .. } => None,
        }
    }
}

impl RecordingError {
    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            reason: reason.into(),
        }
    }

    /// Create an invalid event error.
    pub fn invalid_event(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidEvent {
            line,
            reason: reason.into(),
        }
    }

    /// Wrap an I/O result with context.
    pub fn with_io_context<T>(
        result: std::io::Result<T>,
        context: impl Into<String>,
    ) -> std::result::Result<T, Self> {
        result.map_err(|e| Self::io_context(context, e))
    }
}

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
