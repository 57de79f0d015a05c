//! Interval and calendar value types.
//!
//! Both types validate their preconditions once, at construction, so the
//! merge/coalesce/slot stages can assume well-formed input.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{Result, SlotError};

/// A closed time range `[start, end]` with `start <= end`.
///
/// Serialized as a two-element array: `["9:00", "10:30"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(ClockTime, ClockTime)", into = "(ClockTime, ClockTime)")]
pub struct Interval {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Interval {
    /// # Errors
    /// Returns `SlotError::InvalidInterval` if `start > end`.
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end - self.start
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Open overlap test: intervals that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl TryFrom<(ClockTime, ClockTime)> for Interval {
    type Error = SlotError;

    fn try_from((start, end): (ClockTime, ClockTime)) -> Result<Self> {
        Interval::new(start, end)
    }
}

impl From<Interval> for (ClockTime, ClockTime) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

/// One person's busy intervals, sorted ascending by start.
///
/// Intervals may still overlap or touch; resolving that is the coalescer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct Calendar {
    intervals: Vec<Interval>,
}

impl Calendar {
    /// Build a calendar from intervals already sorted by start.
    ///
    /// # Errors
    /// - `SlotError::InvalidInterval` if any interval has `start > end`.
    /// - `SlotError::UnsortedInput` if any interval starts before its predecessor.
    pub fn new(intervals: Vec<Interval>) -> Result<Self> {
        for interval in &intervals {
            if interval.start > interval.end {
                return Err(SlotError::InvalidInterval {
                    start: interval.start,
                    end: interval.end,
                });
            }
        }
        if let Some(index) = first_unsorted(&intervals) {
            return Err(SlotError::UnsortedInput { index });
        }
        Ok(Self { intervals })
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals
    }
}

impl TryFrom<Vec<Interval>> for Calendar {
    type Error = SlotError;

    fn try_from(intervals: Vec<Interval>) -> Result<Self> {
        Calendar::new(intervals)
    }
}

impl From<Calendar> for Vec<Interval> {
    fn from(calendar: Calendar) -> Self {
        calendar.intervals
    }
}

impl<'a> IntoIterator for &'a Calendar {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Index of the first interval whose start precedes the previous start.
pub(crate) fn first_unsorted(intervals: &[Interval]) -> Option<usize> {
    intervals
        .windows(2)
        .position(|pair| pair[1].start < pair[0].start)
        .map(|i| i + 1)
}
