use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

const SECONDS_PER_DAY: i64 = 86_400;
const NANOS_PER_TICK: u32 = 100;
const MAX_FRACTION_DIGITS: usize = 7;

/// Signed duration with a textual form of `[-][d.]hh:mm:ss[.fffffff]`.
///
/// Accepted input shapes:
/// - `d` (whole days)
/// - `[d.]hh:mm`
/// - `[d.]hh:mm:ss[.fffffff]`
/// - `d:hh:mm:ss[.fffffff]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpan(TimeDelta);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimeSpanParseError {
    #[error("malformed time span: '{0}'")]
    Malformed(String),

    #[error("time span component out of range: '{0}'")]
    OutOfRange(String),
}

impl TimeSpan {
    pub fn new(delta: TimeDelta) -> Self {
        Self(delta)
    }

    pub fn delta(&self) -> TimeDelta {
        self.0
    }

    /// Builds a span from whole days and a time of day, `None` on overflow.
    pub fn from_parts(days: i64, hours: i64, minutes: i64, seconds: i64, nanos: u32) -> Option<Self> {
        let secs = days
            .checked_mul(SECONDS_PER_DAY)?
            .checked_add(hours.checked_mul(3_600)?)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds)?;
        TimeDelta::new(secs, nanos).map(Self)
    }
}

impl From<TimeDelta> for TimeSpan {
    fn from(delta: TimeDelta) -> Self {
        Self(delta)
    }
}

impl FromStr for TimeSpan {
    type Err = TimeSpanParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeSpanParseError::Malformed(s.to_string());
        let out_of_range = || TimeSpanParseError::OutOfRange(s.to_string());

        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(':').collect();
        let (days, hours, minutes, seconds, nanos) = match parts.as_slice() {
            [days] => (digits(days).ok_or_else(malformed)?, 0, 0, 0, 0),
            [head, minutes] => {
                let (days, hours) = split_days(head).ok_or_else(malformed)?;
                (days, hours, digits(minutes).ok_or_else(malformed)?, 0, 0)
            }
            [head, minutes, seconds] => {
                let (days, hours) = split_days(head).ok_or_else(malformed)?;
                let (seconds, nanos) = split_fraction(seconds).ok_or_else(malformed)?;
                (days, hours, digits(minutes).ok_or_else(malformed)?, seconds, nanos)
            }
            [days, hours, minutes, seconds] => {
                let (seconds, nanos) = split_fraction(seconds).ok_or_else(malformed)?;
                (
                    digits(days).ok_or_else(malformed)?,
                    digits(hours).ok_or_else(malformed)?,
                    digits(minutes).ok_or_else(malformed)?,
                    seconds,
                    nanos,
                )
            }
            _ => return Err(malformed()),
        };

        if hours >= 24 || minutes >= 60 || seconds >= 60 {
            return Err(out_of_range());
        }

        let span = Self::from_parts(days, hours, minutes, seconds, nanos).ok_or_else(out_of_range)?;
        Ok(if negative { Self(-span.0) } else { span })
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < TimeDelta::zero() {
            f.write_str("-")?;
        }

        let abs = self.0.abs();
        let total = abs.num_seconds();
        let days = total / SECONDS_PER_DAY;
        let rem = total % SECONDS_PER_DAY;

        if days > 0 {
            write!(f, "{days}.")?;
        }
        write!(f, "{:02}:{:02}:{:02}", rem / 3_600, (rem % 3_600) / 60, rem % 60)?;

        let ticks = abs.subsec_nanos().unsigned_abs() / NANOS_PER_TICK;
        if ticks > 0 {
            write!(f, ".{ticks:07}")?;
        }
        Ok(())
    }
}

impl Serialize for TimeSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn split_days(head: &str) -> Option<(i64, i64)> {
    match head.split_once('.') {
        Some((days, hours)) => Some((digits(days)?, digits(hours)?)),
        None => Some((0, digits(head)?)),
    }
}

fn split_fraction(seconds: &str) -> Option<(i64, u32)> {
    let Some((whole, fraction)) = seconds.split_once('.') else {
        return Some((digits(seconds)?, 0));
    };

    if fraction.len() > MAX_FRACTION_DIGITS {
        return None;
    }
    let ticks = u32::try_from(digits(fraction)?).ok()?;
    let scale = 10u32.pow((MAX_FRACTION_DIGITS - fraction.len()) as u32);
    Some((digits(whole)?, ticks * scale * NANOS_PER_TICK))
}
