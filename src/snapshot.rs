// filepath: src/snapshot.rs
//! The instant being rendered

use chrono::{Datelike, Timelike, Weekday};

use crate::error::FaceError;

/// Two-letter day codes, indexed by days from Sunday
pub const DAY_CODES: [&str; 7] = ["SU", "MO", "TU", "WE", "TH", "FR", "SA"];

/// Wall-clock fields shown on the face. Read-only to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSnapshot {
    weekday: Weekday,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

fn check(
    field: &'static str,
    value: u32,
    range: std::ops::RangeInclusive<u32>,
) -> Result<u8, FaceError> {
    if range.contains(&value) {
        Ok(value as u8)
    } else {
        Err(FaceError::InvalidSnapshot { field, value })
    }
}

impl TimeSnapshot {
    pub fn new(
        weekday: Weekday,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, FaceError> {
        Ok(Self {
            weekday,
            day: check("day", day, 1..=31)?,
            hour: check("hour", hour, 0..=23)?,
            minute: check("minute", minute, 0..=59)?,
            second: check("second", second, 0..=59)?,
        })
    }

    /// Take the fields from any chrono date-time. Chrono already keeps a
    /// leap second at `second() == 59`, so this cannot fail.
    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Self {
        Self {
            weekday: dt.weekday(),
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second().min(59) as u8,
        }
    }

    pub fn day_code(&self) -> &'static str {
        DAY_CODES[self.weekday.num_days_from_sunday() as usize]
    }

    pub fn date_str(&self) -> String {
        format!("{:02}", self.day)
    }

    /// `HH:MM`, both fields zero-padded
    pub fn time_str(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    pub fn sec_str(&self) -> String {
        format!("{:02}", self.second)
    }
}
