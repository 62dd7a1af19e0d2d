//! Study duration type and its text codec.
//!
//! Every duration the tracker persists goes through this module. Values are
//! whole, non-negative seconds and are stored as ISO-8601 duration text
//! (`PT1H2M3S`), the same representation the report files carry.
//!
//! ## Format Specifications
//!
//! ### Canonical form (persistence)
//! - Hours, minutes and seconds components, zero components omitted
//! - Hours are not folded into days (`PT25H`, never `P1DT1H`)
//! - Zero is written as `PT0S`
//!
//! ### Accepted input (parsing)
//! - Case-insensitive (`pt0s` is accepted, older reports contain it)
//! - Optional day component (`P2DT3H`)
//! - Fractional seconds (`PT1.5S`) are truncated to whole seconds
//! - Signs are rejected, a study duration is never negative
//!
//! ### Human form (display only)
//! - `"{h}h, {m}m, {s}s"`, dropping the hour part when it is zero and the
//!   hour and minute parts when both are zero
//!
//! ## Examples
//!
//! ```rust
//! use studylog::libs::duration::StudyDuration;
//!
//! let d = StudyDuration::parse("PT1H30M5S")?;
//! assert_eq!(d.as_secs(), 5405);
//! assert_eq!(d.to_string(), "PT1H30M5S");
//! assert_eq!(d.humanize(), "1h, 30m, 5s");
//! # Ok::<(), studylog::libs::error::StudyError>(())
//! ```

use crate::libs::error::{Result, StudyError};
use chrono::NaiveDateTime;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Non-negative elapsed time with second granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudyDuration(u64);

impl StudyDuration {
    pub const ZERO: StudyDuration = StudyDuration(0);

    pub const fn from_secs(secs: u64) -> Self {
        StudyDuration(secs)
    }

    pub const fn from_mins(mins: u64) -> Self {
        StudyDuration(mins * SECS_PER_MINUTE)
    }

    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Elapsed whole seconds from `start` to `end`.
    ///
    /// Returns `None` when `end` lies before `start` (the wall clock moved
    /// backwards); callers decide how to clamp.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        if end < start {
            return None;
        }
        u64::try_from((end - start).num_seconds()).ok().map(StudyDuration)
    }

    pub fn hours(&self) -> u64 {
        self.0 / SECS_PER_HOUR
    }

    pub fn minutes_part(&self) -> u64 {
        (self.0 % SECS_PER_HOUR) / SECS_PER_MINUTE
    }

    pub fn seconds_part(&self) -> u64 {
        self.0 % SECS_PER_MINUTE
    }

    /// Canonical text form, e.g. `PT1H5M`, `PT0S`.
    pub fn format(&self) -> String {
        if self.0 == 0 {
            return "PT0S".to_string();
        }

        let mut text = String::from("PT");
        if self.hours() > 0 {
            text.push_str(&format!("{}H", self.hours()));
        }
        if self.minutes_part() > 0 {
            text.push_str(&format!("{}M", self.minutes_part()));
        }
        if self.seconds_part() > 0 {
            text.push_str(&format!("{}S", self.seconds_part()));
        }
        text
    }

    /// Parses ISO-8601 duration text.
    ///
    /// # Errors
    ///
    /// Returns [`StudyError::MalformedDuration`] when the text is not a
    /// `P[nD][T[nH][nM][n[.f]S]]` duration, carries a sign, or overflows.
    pub fn parse(text: &str) -> Result<Self> {
        let upper = text.to_ascii_uppercase();
        if upper.starts_with('-') || upper.starts_with('+') {
            return Err(StudyError::malformed_duration(text, "signed durations are not allowed"));
        }
        let body = upper
            .strip_prefix('P')
            .ok_or_else(|| StudyError::malformed_duration(text, "missing 'P' designator"))?;

        let (date_part, time_part) = match body.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (body, None),
        };

        let mut total: u64 = 0;
        let mut seen_component = false;

        if !date_part.is_empty() {
            let days = date_part
                .strip_suffix('D')
                .ok_or_else(|| StudyError::malformed_duration(text, "only days may precede 'T'"))?;
            let days = parse_digits(days).ok_or_else(|| StudyError::malformed_duration(text, "invalid day count"))?;
            total = days
                .checked_mul(SECS_PER_DAY)
                .ok_or_else(|| StudyError::malformed_duration(text, "duration overflows"))?;
            seen_component = true;
        }

        if let Some(time) = time_part {
            if time.is_empty() {
                return Err(StudyError::malformed_duration(text, "'T' must be followed by a time component"));
            }
            total = total
                .checked_add(parse_time_part(text, time)?)
                .ok_or_else(|| StudyError::malformed_duration(text, "duration overflows"))?;
            seen_component = true;
        }

        if !seen_component {
            return Err(StudyError::malformed_duration(text, "no duration components"));
        }

        Ok(StudyDuration(total))
    }

    /// Display form: `1h, 2m, 3s`, `2m, 3s` or `3s`.
    pub fn humanize(&self) -> String {
        if self.hours() > 0 {
            format!("{}h, {}m, {}s", self.hours(), self.minutes_part(), self.seconds_part())
        } else if self.0 / SECS_PER_MINUTE > 0 {
            format!("{}m, {}s", self.minutes_part(), self.seconds_part())
        } else {
            format!("{}s", self.seconds_part())
        }
    }

    /// Hours for charting: whole hours plus whole minutes as a fraction.
    /// Seconds are dropped.
    pub fn chart_hours(&self) -> f64 {
        self.hours() as f64 + self.minutes_part() as f64 / 60.0
    }

    pub fn saturating_add(self, other: StudyDuration) -> StudyDuration {
        StudyDuration(self.0.saturating_add(other.0))
    }
}

/// Parses `[nH][nM][n[.f]S]`, components in that order, each at most once.
fn parse_time_part(original: &str, time: &str) -> Result<u64> {
    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut fraction: Option<String> = None;
    // 0 = nothing yet, 1 = hours, 2 = minutes, 3 = seconds
    let mut last_rank = 0;

    for ch in time.chars() {
        match ch {
            '0'..='9' => match fraction.as_mut() {
                Some(frac) => frac.push(ch),
                None => digits.push(ch),
            },
            '.' | ',' => {
                if digits.is_empty() || fraction.is_some() {
                    return Err(StudyError::malformed_duration(original, "misplaced decimal separator"));
                }
                fraction = Some(String::new());
            }
            'H' | 'M' | 'S' => {
                let (rank, unit) = match ch {
                    'H' => (1, SECS_PER_HOUR),
                    'M' => (2, SECS_PER_MINUTE),
                    _ => (3, 1),
                };
                if rank <= last_rank {
                    return Err(StudyError::malformed_duration(original, "time components out of order"));
                }
                if fraction.is_some() && ch != 'S' {
                    return Err(StudyError::malformed_duration(original, "only seconds may be fractional"));
                }
                if matches!(&fraction, Some(frac) if frac.is_empty() || frac.len() > 9) {
                    return Err(StudyError::malformed_duration(original, "invalid fractional seconds"));
                }
                let value = parse_digits(&digits).ok_or_else(|| StudyError::malformed_duration(original, "missing number"))?;
                let secs = value
                    .checked_mul(unit)
                    .ok_or_else(|| StudyError::malformed_duration(original, "duration overflows"))?;
                total = total
                    .checked_add(secs)
                    .ok_or_else(|| StudyError::malformed_duration(original, "duration overflows"))?;
                last_rank = rank;
                digits.clear();
                fraction = None;
            }
            _ => return Err(StudyError::malformed_duration(original, "unexpected character")),
        }
    }

    if !digits.is_empty() || fraction.is_some() {
        return Err(StudyError::malformed_duration(original, "number without unit"));
    }

    Ok(total)
}

fn parse_digits(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for StudyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for StudyDuration {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        StudyDuration::parse(s)
    }
}

impl Add for StudyDuration {
    type Output = StudyDuration;

    fn add(self, rhs: StudyDuration) -> StudyDuration {
        self.saturating_add(rhs)
    }
}
