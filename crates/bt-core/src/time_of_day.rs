//! Wall-clock time of day, stored as seconds since midnight.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A time of day with second precision, always in `0..86400`.
///
/// Displays and parses as `HH:MM` (parsing also accepts `HH:MM:SS`).
/// Seconds are kept internally but truncated on display, matching the
/// minutes-precision output of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Midnight, the zero point of the day.
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a time of day from seconds since midnight.
    pub fn from_seconds(seconds: u32) -> Result<Self, InvalidTimeOfDay> {
        if seconds < SECONDS_PER_DAY {
            Ok(Self(seconds))
        } else {
            Err(InvalidTimeOfDay::OutOfRange { seconds })
        }
    }

    /// Creates a time of day from an hour and minute.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, InvalidTimeOfDay> {
        Self::from_hms(hour, minute, 0)
    }

    /// Creates a time of day from an hour, minute, and second.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, InvalidTimeOfDay> {
        if hour < 24 && minute < 60 && second < 60 {
            Ok(Self(hour * 3600 + minute * 60 + second))
        } else {
            Err(InvalidTimeOfDay::Components {
                hour,
                minute,
                second,
            })
        }
    }

    /// Seconds since midnight.
    pub const fn seconds(self) -> u32 {
        self.0
    }

    /// Hour component, `0..24`.
    pub const fn hour(self) -> u32 {
        self.0 / 3600
    }

    /// Minute component, `0..60`.
    pub const fn minute(self) -> u32 {
        self.0 / 60 % 60
    }

    /// Second component, `0..60`.
    pub const fn second(self) -> u32 {
        self.0 % 60
    }

    /// Moves this time back by the given number of seconds, wrapping
    /// across midnight. Negative values move forward.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rem_euclid bounds the result to 0..86400"
    )]
    pub fn rewind(self, seconds: i64) -> Self {
        let wrapped = (i64::from(self.0) - seconds).rem_euclid(i64::from(SECONDS_PER_DAY));
        Self(wrapped as u32)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || InvalidTimeOfDay::Parse {
            input: s.to_string(),
        };

        let mut parts = s.split(':');
        let hour: u32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(parse_err)?;
        let minute: u32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(parse_err)?;
        let second: u32 = match parts.next() {
            Some(p) => p.parse().map_err(|_| parse_err())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(parse_err());
        }

        Self::from_hms(hour, minute, second)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // num_seconds_from_midnight ignores leap seconds, so the value
        // already satisfies the range invariant.
        Self(time.num_seconds_from_midnight().min(SECONDS_PER_DAY - 1))
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        Self::from_num_seconds_from_midnight_opt(time.0, 0).unwrap_or(Self::MIN)
    }
}

/// Error type for out-of-range or unparseable times of day.
#[derive(Debug, Clone, Error)]
pub enum InvalidTimeOfDay {
    /// The value does not fall within a single civil day.
    #[error("time of day out of range: {seconds} seconds (expected < 86400)")]
    OutOfRange { seconds: u32 },
    /// An hour, minute, or second component is out of range.
    #[error("invalid clock components: {hour}:{minute}:{second}")]
    Components { hour: u32, minute: u32, second: u32 },
    /// The string is not in `HH:MM` or `HH:MM:SS` form.
    #[error("unparseable time of day: {input:?} (expected HH:MM)")]
    Parse { input: String },
}
