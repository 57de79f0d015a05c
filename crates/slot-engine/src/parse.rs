//! Request decoding.
//!
//! The text format is five lines:
//!
//! ```text
//! [['9:00','10:30'], ['12:00','13:00'], ['16:00','18:00']]
//! ['9:00','20:00']
//! [['10:00','11:30'], ['12:30','14:30'], ['14:30','15:00'], ['16:00','17:00']]
//! ['10:00','18:30']
//! 30
//! ```
//!
//! Busy calendar and window for the first person, then for the second, then the
//! minimum slot length in minutes. Times are quoted with `'` or `"`; whitespace
//! between tokens is ignored and a trailing comma inside a calendar is allowed.
//!
//! Syntax errors are reported as `SlotError::Parse` with the 1-based line and
//! column. Semantic errors (reversed or unsorted intervals) keep their own
//! `SlotError` variant, wrapped in `SlotError::AtLine`.

use crate::availability::MeetingRequest;
use crate::clock::ClockTime;
use crate::error::{Result, SlotError};
use crate::interval::{Calendar, Interval};

const FIELD_NAMES: [&str; 5] = [
    "first calendar",
    "first window",
    "second calendar",
    "second window",
    "minimum minutes",
];

/// Decode a five-line text request.
pub fn parse_request(input: &str) -> Result<MeetingRequest> {
    let lines: Vec<&str> = input.lines().collect();

    if let Some((index, _)) = lines
        .iter()
        .enumerate()
        .skip(FIELD_NAMES.len())
        .find(|(_, line)| !line.trim().is_empty())
    {
        return Err(SlotError::Parse {
            line: index + 1,
            message: "unexpected content after the minimum minutes line".to_string(),
        });
    }
    if lines.len() < FIELD_NAMES.len() {
        return Err(SlotError::Parse {
            line: lines.len() + 1,
            message: format!("missing {}", FIELD_NAMES[lines.len()]),
        });
    }

    Ok(MeetingRequest {
        calendar1: LineParser::new(lines[0], 1).calendar()?,
        window1: LineParser::new(lines[1], 2).window()?,
        calendar2: LineParser::new(lines[2], 3).calendar()?,
        window2: LineParser::new(lines[3], 4).window()?,
        minutes: parse_minutes(lines[4], 5)?,
    })
}

/// Decode a JSON request:
/// `{"calendar1": [["9:00","10:30"]], "window1": ["9:00","20:00"], ..., "minutes": 30}`.
pub fn parse_json_request(input: &str) -> Result<MeetingRequest> {
    Ok(serde_json::from_str(input)?)
}

/// Decode a single bracketed calendar such as `[['9:00','10:30']]`.
pub fn parse_calendar(text: &str) -> Result<Calendar> {
    LineParser::new(text, 1).calendar()
}

/// Decode a single bracketed window such as `['9:00','20:00']`.
pub fn parse_window(text: &str) -> Result<Interval> {
    LineParser::new(text, 1).window()
}

fn parse_minutes(text: &str, line: usize) -> Result<i64> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| SlotError::Parse {
        line,
        message: format!("expected an integer number of minutes, found '{trimmed}'"),
    })
}

/// Cursor over one input line.
struct LineParser<'a> {
    text: &'a str,
    line: usize,
    pos: usize,
}

impl<'a> LineParser<'a> {
    fn new(text: &'a str, line: usize) -> Self {
        Self { text, line, pos: 0 }
    }

    fn calendar(mut self) -> Result<Calendar> {
        let intervals = self.interval_list()?;
        self.finish()?;
        Calendar::new(intervals).map_err(|e| self.at_line(e))
    }

    fn window(mut self) -> Result<Interval> {
        let (start, end) = self.pair()?;
        self.finish()?;
        Interval::new(start, end).map_err(|e| self.at_line(e))
    }

    /// `[ pair (, pair)* ,? ]` or `[]`.
    fn interval_list(&mut self) -> Result<Vec<Interval>> {
        self.expect(b'[')?;
        let mut intervals = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b']') => {
                    self.pos += 1;
                    return Ok(intervals);
                }
                Some(b'[') => {
                    let (start, end) = self.pair()?;
                    let interval = Interval::new(start, end).map_err(|e| self.at_line(e))?;
                    intervals.push(interval);
                }
                _ => return Err(self.error("expected '[' or ']'")),
            }
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {}
                _ => return Err(self.error("expected ',' or ']'")),
            }
        }
    }

    /// `[ clock , clock ]`
    fn pair(&mut self) -> Result<(ClockTime, ClockTime)> {
        self.expect(b'[')?;
        let start = self.clock()?;
        self.expect(b',')?;
        let end = self.clock()?;
        self.expect(b']')?;
        Ok((start, end))
    }

    /// A clock value in single or double quotes.
    fn clock(&mut self) -> Result<ClockTime> {
        self.skip_whitespace();
        let quote = match self.peek() {
            Some(q @ (b'\'' | b'"')) => q,
            _ => return Err(self.error("expected a quoted time")),
        };
        let open = self.pos;
        self.pos += 1;

        let close = self.text.as_bytes()[self.pos..]
            .iter()
            .position(|&b| b == quote)
            .map(|offset| self.pos + offset)
            .ok_or_else(|| self.error("unterminated time literal"))?;

        let raw = &self.text[self.pos..close];
        let clock = raw.parse::<ClockTime>().map_err(|_| SlotError::Parse {
            line: self.line,
            message: format!("invalid time '{raw}' at column {}, expected H:MM", open + 1),
        })?;
        self.pos = close + 1;
        Ok(clock)
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        self.skip_whitespace();
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", byte as char)))
        }
    }

    fn finish(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.pos < self.text.len() {
            return Err(self.error("unexpected trailing characters"));
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn at_line(&self, error: SlotError) -> SlotError {
        SlotError::AtLine {
            line: self.line,
            error: Box::new(error),
        }
    }

    fn error(&self, message: &str) -> SlotError {
        SlotError::Parse {
            line: self.line,
            message: format!("{message} at column {}", self.pos + 1),
        }
    }
}
