//! # slot-engine
//!
//! Common free-slot search for two people's calendars.
//!
//! Given each person's busy intervals, each person's availability window and a
//! minimum duration, the engine returns every time range that is inside both
//! windows, outside every busy interval and long enough to meet in.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{find_common_slots, parse_request, DurationPolicy};
//!
//! let input = "[['9:00','10:00']]\n['9:00','17:00']\n[['13:00','14:00']]\n['9:00','17:00']\n60\n";
//! let request = parse_request(input).unwrap();
//! let slots = find_common_slots(&request, DurationPolicy::Reference).unwrap();
//! assert_eq!(slot_engine::format_slots(&slots), "[['10:00','13:00'], ['14:00','17:00']]");
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — Minute-resolution `ClockTime` values
//! - [`interval`] — `Interval` and validated `Calendar` types
//! - [`merge`] — Stable merge of two sorted calendars
//! - [`coalesce`] — Collapse overlapping or touching intervals
//! - [`slots`] — Free slots within the common availability window
//! - [`availability`] — The merge → coalesce → slots pipeline
//! - [`parse`] — Text and JSON request decoding
//! - [`format`] — Text and JSON slot rendering
//! - [`error`] — Error types

pub mod availability;
pub mod clock;
pub mod coalesce;
pub mod error;
pub mod format;
pub mod interval;
pub mod merge;
pub mod parse;
pub mod slots;

pub use availability::{common_busy, find_common_slots, MeetingRequest};
pub use clock::ClockTime;
pub use coalesce::coalesce;
pub use error::SlotError;
pub use format::{format_intervals, format_slots, slots_to_json};
pub use interval::{Calendar, Interval};
pub use merge::merge_calendars;
pub use parse::{parse_json_request, parse_request};
pub use slots::{common_window, find_slots, DurationPolicy, FreeSlot};
