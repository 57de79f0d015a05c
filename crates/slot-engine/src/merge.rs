//! Stable two-way merge of sorted calendars.
//!
//! This is a merge, not a union: duplicates and overlapping intervals from
//! either side are all kept for the coalescer to resolve.

use crate::error::{Result, SlotError};
use crate::interval::{Calendar, Interval};

/// Merge two calendars into one sequence sorted ascending by start.
///
/// When both heads start at the same time the interval from `a` is taken first,
/// so the output order is fully determined by the inputs.
///
/// # Errors
/// Returns `SlotError::EmptyCalendar` when both calendars are empty. A single
/// empty calendar is fine: the result is the other calendar unchanged.
pub fn merge_calendars(a: &Calendar, b: &Calendar) -> Result<Vec<Interval>> {
    if a.is_empty() && b.is_empty() {
        return Err(SlotError::EmptyCalendar);
    }
    Ok(merge_sorted(a.intervals(), b.intervals()))
}

fn merge_sorted(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if b[j].start < a[i].start {
            merged.push(b[j]);
            j += 1;
        } else {
            merged.push(a[i]);
            i += 1;
        }
    }

    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}
