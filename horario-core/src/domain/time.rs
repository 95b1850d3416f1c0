//! Wall-clock times for attention schedules.
//!
//! Schedules store times as "HH:MM" strings with minute resolution.
//! This module provides a validated time-of-day type; unlike a full
//! instant it carries no date, because a weekly schedule repeats.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time with minute resolution.
///
/// Ordered lexicographically on (hour, minute). Only values renderable
/// as zero-padded "HH:MM" are constructible.
///
/// # Examples
///
/// ```
/// use horario_core::domain::TimeOfDay;
///
/// let t: TimeOfDay = "14:30".parse().unwrap();
/// assert_eq!(t.hour(), 14);
/// assert_eq!(t.minute(), 30);
/// assert_eq!(t.to_string(), "14:30");
///
/// // A one-digit hour is accepted and renders padded.
/// let early: TimeOfDay = "8:05".parse().unwrap();
/// assert_eq!(early.to_string(), "08:05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time from components, range-checked.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// Hours may be one or two digits (0-23); minutes must be exactly
    /// two digits (00-59).
    ///
    /// # Examples
    ///
    /// ```
    /// use horario_core::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse("00:00").is_ok());
    /// assert!(TimeOfDay::parse("23:59").is_ok());
    /// assert!(TimeOfDay::parse("9:30").is_ok());
    ///
    /// assert!(TimeOfDay::parse("24:00").is_err());
    /// assert!(TimeOfDay::parse("12:60").is_err());
    /// assert!(TimeOfDay::parse("12:5").is_err());
    /// assert!(TimeOfDay::parse("1230").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let Some((hours, minutes)) = s.split_once(':') else {
            return Err(TimeError::new("expected HH:MM format"));
        };

        if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::new("invalid hour digits"));
        }
        if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::new("minutes must be two digits"));
        }

        let hour: u8 = hours
            .parse()
            .map_err(|_| TimeError::new("invalid hour digits"))?;
        let minute: u8 = minutes
            .parse()
            .map_err(|_| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Truncate a [`NaiveTime`] to minute resolution.
    pub fn from_naive(time: NaiveTime) -> Self {
        // NaiveTime hours are 0-23 and minutes 0-59; seconds are dropped.
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// Convert to a [`NaiveTime`] at second zero.
    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .expect("hour and minute are range-checked at construction")
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, TimeError> {
        Self::parse(s)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
