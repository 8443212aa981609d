//! Time-of-day arithmetic.
//!
//! All schedule math happens in minutes since midnight. The persisted format
//! (and the one users type) is wall-clock `"HH:MM"`; a class slot is the pair
//! `"HH:MM - HH:MM"`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimetabError;

/// Minutes since midnight. Signed so gap arithmetic can go negative.
pub type Minutes = i32;

/// Parse `"HH:MM"` into minutes since midnight.
pub fn to_minutes(time: &str) -> Result<Minutes, TimetabError> {
    let t = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| TimetabError::InvalidTime(format!("'{}'. Expected HH:MM", time.trim())))?;
    Ok((t.hour() * 60 + t.minute()) as Minutes)
}

/// Format minutes since midnight as `"HH:MM"`.
pub fn format_minutes(minutes: Minutes) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A class time slot. Displayed and persisted as `"HH:MM - HH:MM"`.
///
/// The range is not self-validating: `validate` at the form boundary enforces
/// start < end and the minimum duration before a range ever reaches the
/// schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRange {
    pub start: Minutes,
    pub end: Minutes,
}

impl TimeRange {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        TimeRange { start, end }
    }

    /// Build a range from two `"HH:MM"` strings.
    pub fn from_parts(start: &str, end: &str) -> Result<Self, TimetabError> {
        Ok(TimeRange {
            start: to_minutes(start)?,
            end: to_minutes(end)?,
        })
    }

    pub fn duration_minutes(&self) -> Minutes {
        self.end - self.start
    }

    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / 60.0
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            format_minutes(self.start),
            format_minutes(self.end)
        )
    }
}

impl FromStr for TimeRange {
    type Err = TimetabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| TimetabError::InvalidTime(format!("'{s}'. Expected HH:MM - HH:MM")))?;
        TimeRange::from_parts(start, end)
    }
}

// Persisted as the "HH:MM - HH:MM" string, not a struct.
impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hhmm() {
        assert_eq!(to_minutes("09:30").unwrap(), 570);
        assert_eq!(to_minutes("00:00").unwrap(), 0);
        assert_eq!(to_minutes("23:59").unwrap(), 1439);
        assert_eq!(to_minutes(" 12:00 ").unwrap(), 720);
    }

    #[test]
    fn reject_bad_times() {
        assert!(to_minutes("25:00").is_err());
        assert!(to_minutes("12:60").is_err());
        assert!(to_minutes("noon").is_err());
        assert!(to_minutes("").is_err());
    }

    #[test]
    fn format_roundtrip() {
        assert_eq!(format_minutes(570), "09:30");
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(to_minutes("17:05").unwrap()), "17:05");
    }

    #[test]
    fn range_display_and_parse() {
        let range: TimeRange = "09:30 - 12:30".parse().unwrap();
        assert_eq!(range, TimeRange::new(570, 750));
        assert_eq!(range.to_string(), "09:30 - 12:30");
        assert_eq!(range.duration_minutes(), 180);
        assert_eq!(range.duration_hours(), 3.0);

        // Tolerates missing spaces around the dash
        let tight: TimeRange = "09:30-12:30".parse().unwrap();
        assert_eq!(tight, range);
    }

    #[test]
    fn range_serde_as_string() {
        let range = TimeRange::new(570, 750);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "\"09:30 - 12:30\"");
        let back: TimeRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
