//! Compute free slots from a coalesced busy calendar.
//!
//! Free time is looked for inside the intersection of both availability
//! windows: before the first busy block, between adjacent blocks, and after the
//! last one. Every slot is clipped to that common window.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{Result, SlotError};
use crate::interval::{first_unsorted, Interval};

/// A free time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
    pub duration_minutes: i64,
}

impl FreeSlot {
    fn new(start: ClockTime, end: ClockTime) -> Self {
        Self {
            start,
            end,
            duration_minutes: end - start,
        }
    }

    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start,
            end: self.end,
        }
    }
}

/// How the minimum slot length is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPolicy {
    /// Gaps between busy blocks must be at least `minutes` long *before*
    /// clipping to the common window; the slot before the first block and the
    /// slot after the last block are kept whatever their length.
    #[default]
    Reference,
    /// Every slot must be at least `minutes` long after clipping.
    Uniform,
}

/// Intersection of two availability windows: `[max of starts, min of ends]`.
///
/// # Errors
/// Returns `SlotError::DisjointWindows` if the windows do not meet. Windows
/// that touch at a single instant are accepted and yield an empty range.
pub fn common_window(window1: &Interval, window2: &Interval) -> Result<Interval> {
    let lower = window1.start.max(window2.start);
    let upper = window1.end.min(window2.end);
    if lower > upper {
        return Err(SlotError::DisjointWindows { lower, upper });
    }
    Ok(Interval {
        start: lower,
        end: upper,
    })
}

/// Find free slots of at least `min_minutes` given a coalesced busy calendar.
///
/// `busy` must be non-empty and sorted by start; normally it is the output of
/// [`crate::coalesce::coalesce`]. Overlapping blocks are tolerated: gaps are
/// measured from the latest busy end seen so far. Returned slots are sorted by
/// start, lie inside the common window and never overlap a busy block.
///
/// # Errors
/// - `SlotError::InvalidDuration` if `min_minutes` is negative.
/// - `SlotError::EmptyCalendar` if `busy` is empty.
/// - `SlotError::UnsortedInput` if `busy` is not sorted by start.
/// - `SlotError::DisjointWindows` if the two windows do not meet.
pub fn find_slots(
    busy: &[Interval],
    window1: &Interval,
    window2: &Interval,
    min_minutes: i64,
    policy: DurationPolicy,
) -> Result<Vec<FreeSlot>> {
    if min_minutes < 0 {
        return Err(SlotError::InvalidDuration(min_minutes));
    }
    let first = busy.first().ok_or(SlotError::EmptyCalendar)?;
    if let Some(index) = first_unsorted(busy) {
        return Err(SlotError::UnsortedInput { index });
    }
    let window = common_window(window1, window2)?;

    let mut collector = SlotCollector {
        window,
        min_minutes,
        policy,
        slots: Vec::new(),
    };

    // Leading slot, before the first busy block.
    if window.start < first.start {
        collector.push_clipped(window.start, first.start);
    }

    // Latest busy end seen so far; blocks that overlap an earlier one never
    // pull it backwards.
    let mut cursor = first.end;
    for block in &busy[1..] {
        if block.start > cursor {
            collector.push_gap(cursor, block.start);
        }
        cursor = cursor.max(block.end);
    }

    // Trailing slot, after the last busy block.
    if window.end > cursor {
        collector.push_clipped(cursor, window.end);
    }

    Ok(collector.slots)
}

struct SlotCollector {
    window: Interval,
    min_minutes: i64,
    policy: DurationPolicy,
    slots: Vec<FreeSlot>,
}

impl SlotCollector {
    fn push_gap(&mut self, start: ClockTime, end: ClockTime) {
        // Reference policy tests the raw gap, then clips.
        if self.policy == DurationPolicy::Reference && end - start < self.min_minutes {
            return;
        }
        self.push_clipped(start, end);
    }

    fn push_clipped(&mut self, start: ClockTime, end: ClockTime) {
        let start = start.max(self.window.start);
        let end = end.min(self.window.end);
        if start >= end {
            return;
        }
        if self.policy == DurationPolicy::Uniform && end - start < self.min_minutes {
            return;
        }
        self.slots.push(FreeSlot::new(start, end));
    }
}
