//! Two-person availability: merge both busy calendars and find common free time.
//!
//! The pipeline is merge → coalesce → slot search. Each stage is a pure
//! function, so a [`MeetingRequest`] can be evaluated from any thread.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coalesce::coalesce;
use crate::error::Result;
use crate::interval::{Calendar, Interval};
use crate::merge::merge_calendars;
use crate::slots::{common_window, find_slots, DurationPolicy, FreeSlot};

/// Everything needed to search for a common meeting slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// First person's busy intervals.
    pub calendar1: Calendar,
    /// First person's availability window.
    pub window1: Interval,
    /// Second person's busy intervals.
    pub calendar2: Calendar,
    /// Second person's availability window.
    pub window2: Interval,
    /// Minimum slot length in minutes.
    pub minutes: i64,
}

/// Merge both calendars into one sorted, disjoint busy calendar.
///
/// # Errors
/// Returns `SlotError::EmptyCalendar` if both calendars are empty.
pub fn common_busy(request: &MeetingRequest) -> Result<Vec<Interval>> {
    let merged = merge_calendars(&request.calendar1, &request.calendar2)?;
    let busy = coalesce(&merged);
    debug!(
        merged = merged.len(),
        coalesced = busy.len(),
        "combined busy calendars"
    );
    Ok(busy)
}

/// Find every common free slot for a meeting request.
///
/// The windows are checked before any merging, so a request with disjoint
/// windows fails without touching the calendars.
///
/// # Errors
/// - `SlotError::DisjointWindows` if the two windows do not meet.
/// - `SlotError::EmptyCalendar` if both calendars are empty.
/// - `SlotError::InvalidDuration` if `minutes` is negative.
pub fn find_common_slots(
    request: &MeetingRequest,
    policy: DurationPolicy,
) -> Result<Vec<FreeSlot>> {
    let window = common_window(&request.window1, &request.window2)?;
    debug!(lower = %window.start, upper = %window.end, "common window");

    let busy = common_busy(request)?;
    let slots = find_slots(
        &busy,
        &request.window1,
        &request.window2,
        request.minutes,
        policy,
    )?;

    debug!(slots = slots.len(), ?policy, "found free slots");
    Ok(slots)
}
