//! Range selection validation tests.

use cast_edit::prelude::*;

// =============================================================================
// Structural checks
// =============================================================================

#[test]
fn rejects_empty_selection() {
    assert_eq!(validate(&[]), Err(RangeError::EmptyRangeSet));
}

#[test]
fn overlap_detected_in_either_order() {
    let a = Range::closed(5.0, 10.0);
    let b = Range::closed(2.0, 6.0);

    for ranges in [[a, b], [b, a]] {
        let err = validate(&ranges).unwrap_err();
        assert_eq!(err, RangeError::overlap(a, 6.0));
    }
}

#[test]
fn touching_ranges_are_not_overlapping() {
    assert_eq!(
        validate(&[Range::closed(0.0, 5.0), Range::closed(5.0, 10.0)]),
        Ok(())
    );
    assert_eq!(
        validate(&[Range::closed(5.0, 10.0), Range::closed(0.0, 5.0)]),
        Ok(())
    );
}

#[test]
fn open_stop_only_on_latest_range() {
    let err = validate(&[Range::to_end(0.0), Range::closed(5.0, 10.0)]).unwrap_err();
    assert!(matches!(err, RangeError::SentinelNotLast { .. }));

    assert_eq!(validate(&[Range::closed(0.0, 5.0), Range::to_end(5.0)]), Ok(()));
    // Caller order does not matter, only start order.
    assert_eq!(validate(&[Range::to_end(5.0), Range::closed(0.0, 5.0)]), Ok(()));
}

#[test]
fn raw_pairs_use_zero_as_open_stop() {
    let ranges = [
        Range::from_pair(0.0, 0.0).unwrap(),
        Range::from_pair(5.0, 10.0).unwrap(),
    ];
    assert!(matches!(
        validate(&ranges),
        Err(RangeError::SentinelNotLast { .. })
    ));
}

#[test]
fn checks_run_in_start_order() {
    // The earliest range is reported even though it is listed last.
    let err = validate(&[Range::closed(10.0, 12.0), Range::closed(-3.0, 1.0)]).unwrap_err();
    assert_eq!(
        err,
        RangeError::NegativeStart {
            range: Range::closed(-3.0, 1.0)
        }
    );
}

#[test]
fn negative_stop_beats_stop_ordering() {
    let err = validate(&[Range::closed(2.0, -1.0)]).unwrap_err();
    assert!(matches!(err, RangeError::NegativeStop { .. }));
}

#[test]
fn errors_carry_range_values() {
    let err = validate(&[Range::closed(4.0, 1.5)]).unwrap_err();
    assert_eq!(err.range(), Some(&Range::closed(4.0, 1.5)));
    let msg = err.to_string();
    assert!(msg.contains('4'));
    assert!(msg.contains("1.5"));
}

#[test]
fn non_finite_bounds_are_rejected() {
    // Struct literals and the infallible constructors skip `Range::new`.
    let nan_start = Range {
        start: f64::NAN,
        stop: Stop::At(5.0),
    };
    assert!(matches!(
        validate(&[nan_start]),
        Err(RangeError::NonFinite { .. })
    ));

    let err = validate(&[Range::closed(0.0, f64::INFINITY), Range::closed(1.0, 2.0)]).unwrap_err();
    assert_eq!(
        err,
        RangeError::NonFinite {
            value: f64::INFINITY
        }
    );
}

#[test]
fn non_finite_bounds_never_reach_the_cropper() {
    let recording = Recording::with_events(
        v2_header(80, 24),
        vec![Event::output(0.5, "a"), Event::output(1.5, "b")],
    );
    let ranges = [Range::closed(0.0, f64::INFINITY), Range::closed(1.0, 2.0)];
    assert!(matches!(
        edit(&recording, &ranges),
        Err(RangeError::NonFinite { .. })
    ));
}

// =============================================================================
// Recording-aware checks
// =============================================================================

#[test]
fn open_range_past_last_event() {
    let recording = Recording::with_events(
        v2_header(80, 24),
        vec![Event::output(1.0, "a"), Event::output(3.0, "b")],
    );
    let err = validate_for(&[Range::to_end(3.5)], &recording).unwrap_err();
    assert_eq!(
        err,
        RangeError::StartPastEnd {
            range: Range::to_end(3.5),
            end: 3.0
        }
    );
}

#[test]
fn closed_range_past_last_event_is_fine() {
    let recording = Recording::with_events(v2_header(80, 24), vec![Event::output(1.0, "a")]);
    assert_eq!(
        validate_for(&[Range::closed(100.0, 200.0)], &recording),
        Ok(())
    );
}
