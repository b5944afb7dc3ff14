//! Range selection validation.
//!
//! Checks run on a copy of the ranges sorted by start, so the caller's order
//! (which decides the output order) never affects whether a selection is
//! valid.

use tracing::debug;

use crate::error::RangeError;
use crate::range::{Range, Stop};
use crate::recording::Recording;

/// Validate a range selection without looking at any events.
///
/// # Returns
///
/// Returns `Ok(())` if the ranges are non-empty, finite, well-formed and
/// pairwise non-overlapping, or the first violation found in start order.
pub fn validate(ranges: &[Range]) -> Result<(), RangeError> {
    if ranges.is_empty() {
        return Err(RangeError::EmptyRangeSet);
    }

    let sorted = sorted_by_start(ranges);
    let mut last_stop = 0.0;

    for (index, range) in sorted.iter().enumerate() {
        range.check_finite()?;

        if range.start < 0.0 {
            return Err(RangeError::NegativeStart { range: *range });
        }

        if let Stop::At(stop) = range.stop {
            if stop < 0.0 {
                return Err(RangeError::NegativeStop { range: *range });
            }
            if stop <= range.start {
                return Err(RangeError::StopNotAfterStart { range: *range });
            }
        }

        if range.start < last_stop {
            return Err(RangeError::overlap(*range, last_stop));
        }

        match range.stop {
            Stop::End => {
                if let Some(next) = sorted.get(index + 1) {
                    return Err(RangeError::SentinelNotLast {
                        range: *range,
                        next_start: next.start,
                    });
                }
            }
            Stop::At(stop) => last_stop = stop,
        }
    }

    debug!(count = ranges.len(), "range selection is valid");
    Ok(())
}

/// Validate a range selection against the recording it will be applied to.
///
/// Runs [`validate`], then resolves an open stop to the recording's last
/// event and rejects an open range that starts after that event.
pub fn validate_for(ranges: &[Range], recording: &Recording) -> Result<(), RangeError> {
    validate(ranges)?;

    let Some(end) = recording.end_time() else {
        return Ok(());
    };

    if let Some(range) = ranges.iter().find(|r| r.stop.is_end() && r.start > end) {
        return Err(RangeError::StartPastEnd { range: *range, end });
    }

    Ok(())
}

fn sorted_by_start(ranges: &[Range]) -> Vec<Range> {
    let mut sorted = ranges.to_vec();
    // Stable, so equal starts keep caller order.
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Event, v2_header};

    #[test]
    fn empty_is_rejected() {
        assert_eq!(validate(&[]), Err(RangeError::EmptyRangeSet));
    }

    #[test]
    fn single_full_range() {
        assert_eq!(validate(&[Range::to_end(0.0)]), Ok(()));
    }

    #[test]
    fn negative_start() {
        let err = validate(&[Range::closed(-1.0, 2.0)]).unwrap_err();
        assert!(matches!(err, RangeError::NegativeStart { .. }));
    }

    #[test]
    fn negative_stop() {
        let err = validate(&[Range::closed(1.0, -2.0)]).unwrap_err();
        assert!(matches!(err, RangeError::NegativeStop { .. }));
    }

    #[test]
    fn stop_must_follow_start() {
        let err = validate(&[Range::closed(3.0, 3.0)]).unwrap_err();
        assert_eq!(
            err,
            RangeError::StopNotAfterStart {
                range: Range::closed(3.0, 3.0)
            }
        );
    }

    #[test]
    fn overlap_reports_previous_stop() {
        let err = validate(&[Range::closed(5.0, 10.0), Range::closed(2.0, 6.0)]).unwrap_err();
        assert_eq!(err, RangeError::overlap(Range::closed(5.0, 10.0), 6.0));
    }

    #[test]
    fn equal_starts_overlap() {
        let err = validate(&[Range::closed(1.0, 2.0), Range::closed(1.0, 3.0)]).unwrap_err();
        assert!(matches!(err, RangeError::RangeOverlap { .. }));
    }

    #[test]
    fn sentinel_not_last_reports_next_start() {
        let err = validate(&[Range::to_end(0.0), Range::closed(5.0, 10.0)]).unwrap_err();
        assert_eq!(
            err,
            RangeError::SentinelNotLast {
                range: Range::to_end(0.0),
                next_start: 5.0
            }
        );
    }

    #[test]
    fn non_finite_bounds() {
        assert!(matches!(
            validate(&[Range::closed(f64::NAN, 5.0)]),
            Err(RangeError::NonFinite { .. })
        ));
        assert_eq!(
            validate(&[Range::closed(0.0, f64::INFINITY)]),
            Err(RangeError::NonFinite {
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn validate_for_rejects_open_range_past_end() {
        let recording = Recording::with_events(
            v2_header(80, 24),
            vec![Event::output(1.0, "a"), Event::output(4.0, "b")],
        );

        assert_eq!(validate_for(&[Range::to_end(4.0)], &recording), Ok(()));
        assert_eq!(
            validate_for(&[Range::closed(0.0, 1.0), Range::to_end(5.0)], &recording),
            Err(RangeError::StartPastEnd {
                range: Range::to_end(5.0),
                end: 4.0
            })
        );
    }

    #[test]
    fn validate_for_empty_recording() {
        let recording = Recording::new(v2_header(80, 24));
        assert_eq!(validate_for(&[Range::to_end(5.0)], &recording), Ok(()));
    }

    #[test]
    fn validate_for_runs_structural_checks_first() {
        let recording = Recording::new(v2_header(80, 24));
        assert_eq!(validate_for(&[], &recording), Err(RangeError::EmptyRangeSet));
    }
}
