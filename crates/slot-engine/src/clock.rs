//! Minute-resolution time-of-day values.
//!
//! `ClockTime` orders lexicographically on `(hour, minute)` and subtracts to a
//! signed minute count. No range checks are applied on construction: the
//! ordering and arithmetic stay correct for any integers, so out-of-range
//! values coming from the text boundary compare the same way the digits read.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// A time of day with minute resolution.
///
/// Field order matters: the derived `Ord` compares `hour` first, then `minute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    pub hour: i32,
    pub minute: i32,
}

impl ClockTime {
    pub const fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }

    /// Minutes elapsed since 0:00.
    pub fn minutes_since_midnight(self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }
}

/// `a - b` is the signed number of minutes from `b` to `a`.
impl Sub for ClockTime {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        self.minutes_since_midnight() - rhs.minutes_since_midnight()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Parses `H:MM` or `HH:MM`. The hour takes one or two digits, the minute
/// exactly two.
impl FromStr for ClockTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidClock(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

        if hour.is_empty() || hour.len() > 2 || !all_digits(hour) {
            return Err(invalid());
        }
        if minute.len() != 2 || !all_digits(minute) {
            return Err(invalid());
        }

        let hour = hour.parse().map_err(|_| invalid())?;
        let minute = minute.parse().map_err(|_| invalid())?;
        Ok(Self { hour, minute })
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
