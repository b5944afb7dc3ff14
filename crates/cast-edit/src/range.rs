//! Time ranges selected from a recording.

use std::fmt;
use std::str::FromStr;

use crate::error::RangeError;

/// Stop value that the command line uses to mean "end of recording".
pub const END_OF_RECORDING: f64 = 0.0;

/// Where a range stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stop {
    /// A fixed timestamp in seconds.
    At(f64),
    /// The timestamp of the last event in the recording.
    End,
}

impl Stop {
    /// Interpret a raw stop value, mapping [`END_OF_RECORDING`] to [`Stop::End`].
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_secs(secs: f64) -> Self {
        if secs == END_OF_RECORDING {
            Self::End
        } else {
            Self::At(secs)
        }
    }

    /// Resolve against the end of a recording.
    #[must_use]
    pub const fn resolve(self, end: f64) -> f64 {
        match self {
            Self::At(secs) => secs,
            Self::End => end,
        }
    }

    /// Check if this is an open stop.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(secs) => write!(f, "{secs}"),
            Self::End => f.write_str("end"),
        }
    }
}

impl FromStr for Stop {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("end") {
            return Ok(Self::End);
        }
        let secs = parse_secs(s)?;
        Ok(Self::from_secs(secs))
    }
}

/// A `(start, stop)` window over the original recording's timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Start in seconds, inclusive.
    pub start: f64,
    /// Stop, inclusive.
    pub stop: Stop,
}

impl Range {
    /// Create a range, rejecting NaN and infinite bounds.
    pub fn new(start: f64, stop: Stop) -> Result<Self, RangeError> {
        let range = Self { start, stop };
        range.check_finite()?;
        Ok(range)
    }

    /// Reject a NaN or infinite bound.
    ///
    /// Ranges built with [`Range::closed`], [`Range::to_end`] or a struct
    /// literal skip this check until they are validated.
    pub fn check_finite(&self) -> Result<(), RangeError> {
        if !self.start.is_finite() {
            return Err(RangeError::NonFinite { value: self.start });
        }
        if let Stop::At(secs) = self.stop {
            if !secs.is_finite() {
                return Err(RangeError::NonFinite { value: secs });
            }
        }
        Ok(())
    }

    /// Create a range from a raw `(start, stop)` pair where a stop of `0`
    /// means end of recording.
    pub fn from_pair(start: f64, stop: f64) -> Result<Self, RangeError> {
        Self::new(start, Stop::from_secs(stop))
    }

    /// Create a range with a fixed stop.
    #[must_use]
    pub const fn closed(start: f64, stop: f64) -> Self {
        Self {
            start,
            stop: Stop::At(stop),
        }
    }

    /// Create a range running to the end of the recording.
    #[must_use]
    pub const fn to_end(start: f64) -> Self {
        Self {
            start,
            stop: Stop::End,
        }
    }

    /// Stop of this range given the timestamp of the recording's last event.
    #[must_use]
    pub const fn effective_stop(&self, end: f64) -> f64 {
        self.stop.resolve(end)
    }

    /// Check if a timestamp falls inside this range (both ends inclusive).
    #[must_use]
    pub fn contains(&self, timestamp: f64, end: f64) -> bool {
        self.start <= timestamp && timestamp <= self.effective_stop(end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.stop)
    }
}

/// Parse a seconds value, rejecting NaN and infinities.
pub fn parse_secs(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number of seconds"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number of seconds"))
    }
}
