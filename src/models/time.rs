//! Time-of-day handling for the scheduling wizard.
//!
//! All times entering the schedule generator are parsed into [`TimeOfDay`]
//! at the form boundary, so downstream code never sees raw `HH:MM` strings.

use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error raised when a submitted time string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("invalid time {0:?}: expected HH:MM")]
    Format(String),
    #[error("time {0:?} out of range: hour must be < 24 and minute < 60")]
    Range(String),
}

/// A clock time within a single day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from a raw minute count, wrapping past midnight.
    ///
    /// Slot arithmetic may run past 24:00 when prep time overflows the end
    /// of a late window; display wraps the same way `%H:%M` formatting does.
    pub fn from_minutes(minutes: u32) -> Self {
        Self((minutes % MINUTES_PER_DAY) as u16)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        u32::from(self.0)
    }

    pub fn hour(&self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes() % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(s.to_string()))?;
        let hour: u16 = h
            .trim()
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        let minute: u16 = m
            .trim()
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        if hour >= 24 || minute >= 60 {
            return Err(TimeParseError::Range(s.to_string()));
        }
        Ok(Self(hour * 60 + minute))
    }
}

/// The 96 quarter-hour times (00:00 through 23:45) offered by the form
/// selects. The generator does not rely on this granularity.
pub fn quarter_hours() -> Vec<TimeOfDay> {
    (0..MINUTES_PER_DAY)
        .step_by(15)
        .map(TimeOfDay::from_minutes)
        .collect()
}
