//! Collapse a start-sorted interval sequence into its minimal disjoint cover.

use crate::interval::Interval;

/// Merge overlapping or touching intervals.
///
/// The input must be sorted ascending by start (as produced by
/// [`crate::merge::merge_calendars`]). The overlap test is closed: an interval
/// starting exactly when the current run ends is absorbed, so back-to-back
/// meetings become one busy block. The run's end tracks the maximum end seen,
/// since input ends are not monotonic.
///
/// Returns a sorted list where `out[i].end < out[i + 1].start` for every
/// adjacent pair. Empty input gives empty output.
pub fn coalesce(intervals: &[Interval]) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::new();
    for interval in intervals {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(*interval);
    }
    merged
}
