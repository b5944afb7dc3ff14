//! Cropping and rearranging a recording.
//!
//! Each range contributes the events inside it, shifted so the range begins
//! where the previous one ended. Ranges are applied in the order given, which
//! is how sections get rearranged.

use tracing::debug;

use crate::range::Range;
use crate::recording::Recording;

/// What one range contributed to a crop.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    /// The range as requested.
    pub range: Range,
    /// Stop after resolving an open stop.
    pub effective_stop: f64,
    /// Offset at which this section begins in the output.
    pub offset: f64,
    /// Number of events selected.
    pub events: usize,
}

impl SectionSummary {
    /// Length of this section on the output timeline.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.effective_stop - self.range.start
    }
}

/// Per-range breakdown of a crop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CropSummary {
    /// Sections in output order.
    pub sections: Vec<SectionSummary>,
}

impl CropSummary {
    /// Total length of the output timeline.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.sections.iter().map(SectionSummary::duration).sum()
    }

    /// Total number of events in the output.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.sections.iter().map(|s| s.events).sum()
    }
}

/// Crop a recording to the given ranges, concatenated in the given order.
///
/// The ranges must already have passed [`validate`](crate::validate::validate).
/// The source recording is left untouched.
#[must_use]
pub fn crop(recording: &Recording, ranges: &[Range]) -> Recording {
    crop_with_summary(recording, ranges).0
}

/// Like [`crop`], also reporting what each range contributed.
#[must_use]
pub fn crop_with_summary(recording: &Recording, ranges: &[Range]) -> (Recording, CropSummary) {
    let mut output = Recording::new(recording.header.clone());
    let mut summary = CropSummary::default();
    let mut offset = 0.0;

    for range in ranges {
        // With no events an open range has nothing to run to.
        let end = recording.end_time().unwrap_or(range.start);
        let effective_stop = range.effective_stop(end);
        let before = output.len();

        output.events.extend(
            recording
                .events
                .iter()
                .filter(|e| range.contains(e.timestamp, end))
                .map(|e| e.at(e.timestamp - range.start + offset)),
        );

        let section = SectionSummary {
            range: *range,
            effective_stop,
            offset,
            events: output.len() - before,
        };
        debug!(
            range = %section.range,
            effective_stop,
            offset,
            events = section.events,
            "cropped section"
        );

        offset += section.duration();
        summary.sections.push(section);
    }

    (output, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Event, v2_header};

    fn recording_at(timestamps: &[f64]) -> Recording {
        Recording::with_events(
            v2_header(80, 24),
            timestamps
                .iter()
                .enumerate()
                .map(|(i, ts)| Event::output(*ts, format!("frame {i}")))
                .collect(),
        )
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn full_range_is_identity() {
        let source = recording_at(&[0.5, 1.0, 2.25, 9.0]);
        let cropped = crop(&source, &[Range::to_end(0.0)]);
        assert_eq!(cropped, source);
    }

    #[test]
    fn rearranges_sections() {
        let source = recording_at(&[1.0, 3.0, 6.0, 8.0]);
        let cropped = crop(&source, &[Range::closed(6.0, 8.0), Range::closed(1.0, 3.0)]);

        assert_close(&cropped.timestamps(), &[0.0, 2.0, 2.0, 4.0]);
        let payloads: Vec<_> = cropped.events.iter().map(|e| e.payload.as_str()).collect();
        assert_eq!(payloads, ["frame 2", "frame 3", "frame 0", "frame 1"]);
    }

    #[test]
    fn excludes_middle_section() {
        let source = recording_at(&[1.0, 2.0, 3.0, 5.0, 7.0, 9.0]);
        let cropped = crop(&source, &[Range::closed(0.0, 2.3), Range::to_end(7.0)]);
        assert_close(&cropped.timestamps(), &[1.0, 2.0, 2.3, 4.3]);
    }

    #[test]
    fn empty_section_still_advances_offset() {
        let source = recording_at(&[1.0, 2.0, 300.0]);
        let (cropped, summary) = crop_with_summary(
            &source,
            &[Range::closed(100.0, 200.0), Range::closed(0.0, 2.0)],
        );

        assert_close(&cropped.timestamps(), &[101.0, 102.0]);
        assert_eq!(summary.sections[0].events, 0);
        assert_eq!(summary.sections[1].offset, 100.0);
    }

    #[test]
    fn source_is_not_modified() {
        let source = recording_at(&[1.0, 3.0, 6.0, 8.0]);
        let snapshot = source.clone();
        let _ = crop(&source, &[Range::closed(6.0, 8.0)]);
        assert_eq!(source, snapshot);
    }

    #[test]
    fn header_is_copied() {
        let mut source = recording_at(&[1.0]);
        source
            .header
            .insert("title".to_string(), serde_json::Value::from("demo"));
        let cropped = crop(&source, &[Range::closed(5.0, 6.0)]);
        assert_eq!(cropped.header, source.header);
        assert!(cropped.is_empty());
    }

    #[test]
    fn open_range_on_empty_recording() {
        let source = recording_at(&[]);
        let (cropped, summary) = crop_with_summary(&source, &[Range::to_end(3.0)]);
        assert!(cropped.is_empty());
        assert_eq!(summary.duration(), 0.0);
    }

    #[test]
    fn summary_totals() {
        let source = recording_at(&[1.0, 2.0, 3.0, 5.0, 7.0, 9.0]);
        let (_, summary) =
            crop_with_summary(&source, &[Range::closed(0.0, 2.3), Range::to_end(7.0)]);
        assert_eq!(summary.event_count(), 4);
        assert!((summary.duration() - 4.3).abs() < 1e-9);
        assert_eq!(summary.sections[1].effective_stop, 9.0);
    }
}
