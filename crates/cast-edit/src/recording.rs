//! Recording data model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque recording header (format version, terminal size, env, ...).
///
/// Kept as a JSON object so unknown keys and key order survive a crop.
pub type Header = Map<String, Value>;

/// Channel tag used by asciicast for terminal output.
pub const OUTPUT_CHANNEL: &str = "o";

/// One recorded event.
///
/// Serialized as a `[timestamp, channel, payload]` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, String, String)", into = "(f64, String, String)")]
pub struct Event {
    /// Seconds from the start of the recording.
    pub timestamp: f64,
    /// Opaque channel tag, e.g. `"o"`.
    pub channel: String,
    /// Opaque payload text.
    pub payload: String,
}

impl Event {
    /// Create an event.
    pub fn new(timestamp: f64, channel: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            timestamp,
            channel: channel.into(),
            payload: payload.into(),
        }
    }

    /// Create an output event.
    pub fn output(timestamp: f64, payload: impl Into<String>) -> Self {
        Self::new(timestamp, OUTPUT_CHANNEL, payload)
    }

    /// Copy of this event moved to a new timestamp.
    #[must_use]
    pub fn at(&self, timestamp: f64) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }
}

impl From<(f64, String, String)> for Event {
    fn from((timestamp, channel, payload): (f64, String, String)) -> Self {
        Self {
            timestamp,
            channel,
            payload,
        }
    }
}

impl From<Event> for (f64, String, String) {
    fn from(event: Event) -> Self {
        (event.timestamp, event.channel, event.payload)
    }
}

/// A header plus its event stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recording {
    /// Header, copied verbatim to edited output.
    pub header: Header,
    /// Events in source order.
    pub events: Vec<Event>,
}

impl Recording {
    /// Create an empty recording with the given header.
    #[must_use]
    pub const fn new(header: Header) -> Self {
        Self {
            header,
            events: Vec::new(),
        }
    }

    /// Create a recording from a header and events.
    #[must_use]
    pub const fn with_events(header: Header, events: Vec<Event>) -> Self {
        Self { header, events }
    }

    /// Add an event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Timestamp of the last event, which is what an open stop resolves to.
    #[must_use]
    pub fn end_time(&self) -> Option<f64> {
        self.events.last().map(|e| e.timestamp)
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if there are no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Check that timestamps never decrease.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.events
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }

    /// Timestamps of all events, in order.
    #[must_use]
    pub fn timestamps(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.timestamp).collect()
    }
}

/// Build a minimal asciicast v2 header.
#[must_use]
pub fn v2_header(width: u16, height: u16) -> Header {
    let mut header = Header::new();
    header.insert("version".to_string(), Value::from(2));
    header.insert("width".to_string(), Value::from(width));
    header.insert("height".to_string(), Value::from(height));
    header
}
