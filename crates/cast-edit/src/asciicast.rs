//! Asciicast v2 reading and writing.
//!
//! A recording file is a JSON header object on the first line followed by
//! one `[timestamp, channel, payload]` array per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DEFAULT_PRECISION;
use crate::error::RecordingError;
use crate::recording::{Event, Header, Recording};

type Result<T> = std::result::Result<T, RecordingError>;

/// Options for writing a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Decimal places kept on timestamps.
    pub precision: u32,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl WriteOptions {
    /// Set the timestamp precision.
    #[must_use]
    pub const fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}

/// Read a recording in asciicast v2 format.
pub fn read_recording<R: BufRead>(reader: R) -> Result<Recording> {
    let mut lines = reader.lines().enumerate();

    let header = loop {
        let Some((_, line)) = lines.next() else {
            return Err(RecordingError::MissingHeader);
        };
        let line = RecordingError::with_io_context(line, "reading asciicast header line")?;
        if !line.trim().is_empty() {
            break parse_header(&line)?;
        }
    };

    let mut recording = Recording::new(header);
    for (index, line) in lines {
        let line = RecordingError::with_io_context(line, "reading asciicast event line")?;
        if line.trim().is_empty() {
            continue;
        }
        recording.push(parse_event(&line, index + 1)?);
    }

    if !recording.is_monotonic() {
        warn!("event timestamps are not in order; cropping uses them as they are");
    }
    debug!(events = recording.len(), "read recording");

    Ok(recording)
}

/// Read a recording from a file.
pub fn read_recording_file(path: &Path) -> Result<Recording> {
    let file = File::open(path)
        .map_err(|e| RecordingError::io_context(format!("opening {}", path.display()), e))?;
    read_recording(BufReader::new(file))
}

/// Write a recording in asciicast v2 format.
pub fn write_recording<W: Write>(
    writer: &mut W,
    recording: &Recording,
    options: WriteOptions,
) -> Result<()> {
    serde_json::to_writer(&mut *writer, &recording.header)?;
    RecordingError::with_io_context(writeln!(writer), "writing asciicast header")?;

    for event in &recording.events {
        let event = event.at(round_to(event.timestamp, options.precision));
        serde_json::to_writer(&mut *writer, &event)?;
        RecordingError::with_io_context(writeln!(writer), "writing asciicast event")?;
    }

    Ok(())
}

/// Write a recording to a file, replacing it if it exists.
pub fn write_recording_file(
    path: &Path,
    recording: &Recording,
    options: WriteOptions,
) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| RecordingError::io_context(format!("creating {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    write_recording(&mut writer, recording, options)?;
    writer
        .flush()
        .map_err(|e| RecordingError::io_context(format!("flushing {}", path.display()), e))?;
    debug!(path = %path.display(), events = recording.len(), "wrote recording");
    Ok(())
}

fn parse_header(line: &str) -> Result<Header> {
    match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(header)) => Ok(header),
        Ok(other) => Err(RecordingError::invalid_header(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(RecordingError::invalid_header(e.to_string())),
    }
}

fn parse_event(line: &str, line_number: usize) -> Result<Event> {
    let event: Event = serde_json::from_str(line)
        .map_err(|e| RecordingError::invalid_event(line_number, e.to_string()))?;

    if !event.timestamp.is_finite() || event.timestamp < 0.0 {
        return Err(RecordingError::invalid_event(
            line_number,
            format!("timestamp {} is not a non-negative number", event.timestamp),
        ));
    }

    Ok(event)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Round to a fixed number of decimal places.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() { rounded } else { value }
}
