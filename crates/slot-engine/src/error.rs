//! Error types for slot-engine operations.

use thiserror::Error;

use crate::clock::ClockTime;

/// Precondition violations and decode failures. Every variant aborts the whole
/// computation; no partial slot list is ever returned alongside an error.
#[derive(Error, Debug)]
pub enum SlotError {
    /// A busy calendar with no intervals reached a stage that needs at least one.
    #[error("Empty calendar: at least one busy interval is required")]
    EmptyCalendar,

    /// An interval list is not sorted ascending by start time.
    /// `index` is the position of the first out-of-order interval.
    #[error("Unsorted input: interval {index} starts before its predecessor")]
    UnsortedInput { index: usize },

    /// An interval ends before it starts.
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: ClockTime, end: ClockTime },

    /// The two availability windows share no time at all.
    #[error("Disjoint windows: common window would run from {lower} to {upper}")]
    DisjointWindows { lower: ClockTime, upper: ClockTime },

    /// A clock value did not match the `H:MM` form.
    #[error("Invalid clock value '{0}': expected H:MM")]
    InvalidClock(String),

    /// The requested minimum slot length is negative.
    #[error("Invalid duration: minimum slot length must not be negative, got {0}")]
    InvalidDuration(i64),

    /// The text input was malformed. `line` is 1-based.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A semantic error (reversed or unsorted interval) found on a given
    /// line of the text input. `line` is 1-based.
    #[error("Line {line}: {error}")]
    AtLine { line: usize, error: Box<SlotError> },

    /// JSON request decoding or result encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
