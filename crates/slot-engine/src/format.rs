//! Rendering of slot and interval lists.
//!
//! The text form mirrors the input format: `[['10:00','13:00'], ['14:00','17:00']]`,
//! so a rendered busy calendar can be fed back in as a calendar line.

use crate::error::Result;
use crate::interval::Interval;
use crate::slots::FreeSlot;

/// Render free slots as a bracketed list of quoted `H:MM` pairs.
pub fn format_slots(slots: &[FreeSlot]) -> String {
    let intervals: Vec<Interval> = slots.iter().map(FreeSlot::interval).collect();
    format_intervals(&intervals)
}

/// Render intervals as a bracketed list of quoted `H:MM` pairs.
pub fn format_intervals(intervals: &[Interval]) -> String {
    let items: Vec<String> = intervals
        .iter()
        .map(|iv| format!("['{}','{}']", iv.start, iv.end))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Render free slots as a pretty-printed JSON array of
/// `{"start", "end", "duration_minutes"}` objects.
pub fn slots_to_json(slots: &[FreeSlot]) -> Result<String> {
    Ok(serde_json::to_string_pretty(slots)?)
}
