//! The read, validate, crop, write pipeline.

use std::path::PathBuf;

use tracing::info;

use crate::asciicast::{WriteOptions, read_recording_file, write_recording_file};
use crate::crop::{CropSummary, crop, crop_with_summary};
use crate::error::{RangeError, Result};
use crate::range::Range;
use crate::recording::Recording;
use crate::validate::validate_for;

/// Validate `ranges` against `recording` and crop it.
pub fn edit(recording: &Recording, ranges: &[Range]) -> std::result::Result<Recording, RangeError> {
    validate_for(ranges, recording)?;
    Ok(crop(recording, ranges))
}

/// One file-to-file edit.
#[derive(Debug, Clone)]
pub struct EditRequest {
    /// Recording to read.
    pub source: PathBuf,
    /// Where to write the result; `None` checks without writing.
    pub destination: Option<PathBuf>,
    /// Sections to keep, in output order.
    pub ranges: Vec<Range>,
    /// Output formatting.
    pub write: WriteOptions,
}

impl EditRequest {
    /// Create a request writing `source` cropped to `ranges` into `destination`.
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        ranges: Vec<Range>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: Some(destination.into()),
            ranges,
            write: WriteOptions::default(),
        }
    }

    /// Do everything except writing the output.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.destination = None;
        self
    }

    /// Set output formatting.
    #[must_use]
    pub const fn write_options(mut self, write: WriteOptions) -> Self {
        self.write = write;
        self
    }

    /// Run the edit.
    ///
    /// Nothing is written unless the ranges are valid for the recording.
    pub fn run(&self) -> Result<CropSummary> {
        let recording = read_recording_file(&self.source)?;
        validate_for(&self.ranges, &recording)?;

        let (cropped, summary) = crop_with_summary(&recording, &self.ranges);
        info!(
            source = %self.source.display(),
            sections = summary.sections.len(),
            events_in = recording.len(),
            events_out = cropped.len(),
            duration = summary.duration(),
            "cropped recording"
        );

        if let Some(destination) = &self.destination {
            write_recording_file(destination, &cropped, self.write)?;
            info!(destination = %destination.display(), "wrote recording");
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Event, v2_header};

    #[test]
    fn edit_validates_before_cropping() {
        let recording = Recording::with_events(v2_header(80, 24), vec![Event::output(1.0, "a")]);
        assert_eq!(edit(&recording, &[]), Err(RangeError::EmptyRangeSet));

        let cropped = edit(&recording, &[Range::to_end(0.0)]).unwrap();
        assert_eq!(cropped, recording);
    }

    #[test]
    fn request_builder() {
        let request = EditRequest::new("in.cast", "out.cast", vec![Range::to_end(0.0)])
            .write_options(WriteOptions::default().precision(3))
            .dry_run();
        assert!(request.destination.is_none());
        assert_eq!(request.write.precision, 3);
    }
}
