//! Tests for free slot computation over two calendars.

use slot_engine::{
    common_busy, find_common_slots, find_slots, Calendar, ClockTime, DurationPolicy, FreeSlot,
    Interval, MeetingRequest, SlotError,
};

/// Helper to create an interval from hour/minute pairs.
fn iv(start_hour: i32, start_min: i32, end_hour: i32, end_min: i32) -> Interval {
    Interval::new(
        ClockTime::new(start_hour, start_min),
        ClockTime::new(end_hour, end_min),
    )
    .unwrap()
}

fn request(
    calendar1: Vec<Interval>,
    window1: Interval,
    calendar2: Vec<Interval>,
    window2: Interval,
    minutes: i64,
) -> MeetingRequest {
    MeetingRequest {
        calendar1: Calendar::new(calendar1).unwrap(),
        window1,
        calendar2: Calendar::new(calendar2).unwrap(),
        window2,
        minutes,
    }
}

fn ranges(slots: &[FreeSlot]) -> Vec<Interval> {
    slots.iter().map(FreeSlot::interval).collect()
}

// ---------------------------------------------------------------------------
// End-to-end examples
// ---------------------------------------------------------------------------

#[test]
fn overlapping_busy_leaves_trailing_slot() {
    // A busy 9:00-10:00, B busy 9:30-11:00, both free 9:00-17:00.
    let req = request(
        vec![iv(9, 0, 10, 0)],
        iv(9, 0, 17, 0),
        vec![iv(9, 30, 11, 0)],
        iv(9, 0, 17, 0),
        30,
    );

    assert_eq!(common_busy(&req).unwrap(), vec![iv(9, 0, 11, 0)]);

    let slots = find_common_slots(&req, DurationPolicy::Reference).unwrap();
    assert_eq!(ranges(&slots), vec![iv(11, 0, 17, 0)]);
    assert_eq!(slots[0].duration_minutes, 360);
}

#[test]
fn middle_and_trailing_gaps() {
    let req = request(
        vec![iv(9, 0, 10, 0)],
        iv(9, 0, 17, 0),
        vec![iv(13, 0, 14, 0)],
        iv(9, 0, 17, 0),
        60,
    );

    let slots = find_common_slots(&req, DurationPolicy::Reference).unwrap();

    assert_eq!(ranges(&slots), vec![iv(10, 0, 13, 0), iv(14, 0, 17, 0)]);
    assert_eq!(slots[0].duration_minutes, 180);
}

#[test]
fn short_middle_gap_filtered() {
    // Middle gap is 180 minutes, below the 200-minute minimum. The trailing
    // slot is kept regardless of length.
    let req = request(
        vec![iv(9, 0, 10, 0)],
        iv(9, 0, 17, 0),
        vec![iv(13, 0, 14, 0)],
        iv(9, 0, 17, 0),
        200,
    );

    let slots = find_common_slots(&req, DurationPolicy::Reference).unwrap();

    assert_eq!(ranges(&slots), vec![iv(14, 0, 17, 0)]);
}

#[test]
fn two_full_calendars() {
    let req = request(
        vec![iv(9, 0, 10, 30), iv(12, 0, 13, 0), iv(16, 0, 18, 0)],
        iv(9, 0, 20, 0),
        vec![
            iv(10, 0, 11, 30),
            iv(12, 30, 14, 30),
            iv(14, 30, 15, 0),
            iv(16, 0, 17, 0),
        ],
        iv(10, 0, 18, 30),
        30,
    );

    let slots = find_common_slots(&req, DurationPolicy::Reference).unwrap();

    assert_eq!(
        ranges(&slots),
        vec![iv(11, 30, 12, 0), iv(15, 0, 16, 0), iv(18, 0, 18, 30)]
    );
}

#[test]
fn one_empty_calendar_uses_the_other() {
    let req = request(
        vec![],
        iv(8, 0, 18, 0),
        vec![iv(12, 0, 13, 0)],
        iv(9, 0, 17, 0),
        30,
    );

    let slots = find_common_slots(&req, DurationPolicy::Reference).unwrap();

    assert_eq!(ranges(&slots), vec![iv(9, 0, 12, 0), iv(13, 0, 17, 0)]);
}

// ---------------------------------------------------------------------------
// Minimum-duration policy
// ---------------------------------------------------------------------------

#[test]
fn reference_keeps_short_leading_slot() {
    let busy = [iv(9, 10, 17, 0)];
    let window = iv(9, 0, 17, 0);

    let slots = find_slots(&busy, &window, &window, 60, DurationPolicy::Reference).unwrap();
    assert_eq!(ranges(&slots), vec![iv(9, 0, 9, 10)]);

    let slots = find_slots(&busy, &window, &window, 60, DurationPolicy::Uniform).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn reference_keeps_short_trailing_slot() {
    let busy = [iv(9, 0, 16, 45)];
    let window = iv(9, 0, 17, 0);

    let slots = find_slots(&busy, &window, &window, 60, DurationPolicy::Reference).unwrap();
    assert_eq!(ranges(&slots), vec![iv(16, 45, 17, 0)]);

    let slots = find_slots(&busy, &window, &window, 60, DurationPolicy::Uniform).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn reference_tests_raw_gap_before_clipping() {
    // Raw gap 9:00-9:40 is 40 minutes, but the common window starts at 9:20,
    // so the clipped slot is only 20 minutes.
    let busy = [iv(8, 0, 9, 0), iv(9, 40, 12, 0)];
    let w1 = iv(9, 20, 17, 0);
    let w2 = iv(8, 0, 17, 0);

    let slots = find_slots(&busy, &w1, &w2, 30, DurationPolicy::Reference).unwrap();
    assert_eq!(ranges(&slots), vec![iv(9, 20, 9, 40), iv(12, 0, 17, 0)]);
    assert_eq!(slots[0].duration_minutes, 20);

    let slots = find_slots(&busy, &w1, &w2, 30, DurationPolicy::Uniform).unwrap();
    assert_eq!(ranges(&slots), vec![iv(12, 0, 17, 0)]);
}

#[test]
fn gap_exactly_minimum_is_kept() {
    let busy = [iv(9, 0, 10, 0), iv(10, 30, 17, 0)];
    let window = iv(9, 0, 17, 0);

    let slots = find_slots(&busy, &window, &window, 30, DurationPolicy::Uniform).unwrap();

    assert_eq!(ranges(&slots), vec![iv(10, 0, 10, 30)]);
}

// ---------------------------------------------------------------------------
// Window clipping
// ---------------------------------------------------------------------------

#[test]
fn busy_block_past_window_end_clips_leading_slot() {
    // The only busy block starts after the common window ends.
    let busy = [iv(18, 0, 19, 0)];
    let window = iv(9, 0, 17, 0);

    let slots = find_slots(&busy, &window, &window, 30, DurationPolicy::Reference).unwrap();

    assert_eq!(ranges(&slots), vec![iv(9, 0, 17, 0)]);
}

#[test]
fn busy_block_before_window_start_clips_trailing_slot() {
    let busy = [iv(6, 0, 7, 0)];
    let window = iv(9, 0, 17, 0);

    let slots = find_slots(&busy, &window, &window, 30, DurationPolicy::Reference).unwrap();

    assert_eq!(ranges(&slots), vec![iv(9, 0, 17, 0)]);
}

#[test]
fn busy_covering_window_gives_no_slots() {
    let busy = [iv(8, 0, 18, 0)];
    let window = iv(9, 0, 17, 0);

    let slots = find_slots(&busy, &window, &window, 0, DurationPolicy::Reference).unwrap();

    assert!(slots.is_empty());
}

// ---------------------------------------------------------------------------
// Failure cases
// ---------------------------------------------------------------------------

#[test]
fn disjoint_windows_rejected() {
    let req = request(
        vec![iv(9, 0, 10, 0)],
        iv(9, 0, 11, 0),
        vec![iv(13, 0, 14, 0)],
        iv(12, 0, 17, 0),
        30,
    );

    let err = find_common_slots(&req, DurationPolicy::Reference).unwrap_err();

    match err {
        SlotError::DisjointWindows { lower, upper } => {
            assert_eq!(lower, ClockTime::new(12, 0));
            assert_eq!(upper, ClockTime::new(11, 0));
        }
        other => panic!("expected DisjointWindows, got {other:?}"),
    }
}

#[test]
fn disjoint_windows_reported_before_empty_calendars() {
    let req = request(vec![], iv(9, 0, 11, 0), vec![], iv(12, 0, 17, 0), 30);

    let err = find_common_slots(&req, DurationPolicy::Reference).unwrap_err();

    assert!(matches!(err, SlotError::DisjointWindows { .. }));
}

#[test]
fn both_calendars_empty_rejected() {
    let req = request(vec![], iv(9, 0, 17, 0), vec![], iv(9, 0, 17, 0), 30);

    let err = find_common_slots(&req, DurationPolicy::Reference).unwrap_err();

    assert!(matches!(err, SlotError::EmptyCalendar));
}

#[test]
fn empty_busy_calendar_rejected_by_finder() {
    let window = iv(9, 0, 17, 0);
    let err = find_slots(&[], &window, &window, 30, DurationPolicy::Reference).unwrap_err();
    assert!(matches!(err, SlotError::EmptyCalendar));
}

#[test]
fn unsorted_busy_calendar_rejected_by_finder() {
    let window = iv(9, 0, 17, 0);
    let busy = [iv(12, 0, 13, 0), iv(9, 0, 10, 0)];

    let err = find_slots(&busy, &window, &window, 30, DurationPolicy::Reference).unwrap_err();

    assert!(matches!(err, SlotError::UnsortedInput { index: 1 }));
}

#[test]
fn negative_minimum_rejected() {
    let window = iv(9, 0, 17, 0);
    let busy = [iv(12, 0, 13, 0)];

    let err = find_slots(&busy, &window, &window, -5, DurationPolicy::Reference).unwrap_err();

    assert!(matches!(err, SlotError::InvalidDuration(-5)));
}
