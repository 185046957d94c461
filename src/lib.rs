mod consts;
mod editor;
mod prelude;
mod store;
mod types;

pub use consts::*;
pub use editor::{DigitOutcome, EditError, EditorConfig, SegmentEditor};
pub use store::{ComposeError, SegmentStore};
pub use types::{Accuracy, SegmentBounds, SegmentType};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;
use types::days_in_month;

/// A concrete local wall-clock date-time, millisecond precision.
/// No timezone is attached; the fields are exactly what a segmented input
/// displays. Construction always validates, so every value of this type is
/// a real calendar date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClock {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display(fmt = "Invalid date-time format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u16),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u16, day: u16 },
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u16),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u16),
    #[display(fmt = "Invalid second: {} (must be 0-{})", "_0", MAX_SECOND)]
    InvalidSecond(u16),
    #[display(fmt = "Invalid millisecond: {} (must be 0-{})", "_0", MAX_MILLISECOND)]
    InvalidMillisecond(u16),
    #[display(fmt = "Empty date-time string")]
    EmptyInput,
}

impl std::error::Error for FieldError {}

impl WallClock {
    /// Creates a validated wall-clock value from already-narrow components.
    ///
    /// # Errors
    /// Returns the `FieldError` for the first component out of range,
    /// including a day that does not exist in the given month.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, FieldError> {
        Self::from_segments(
            year,
            u16::from(month),
            u16::from(day),
            u16::from(hour),
            u16::from(minute),
            u16::from(second),
            millisecond,
        )
    }

    /// Creates a validated wall-clock value from raw segment values.
    ///
    /// This is the composition path a segment store uses: all components
    /// arrive as plain `u16` and are range-checked here, then the day is
    /// checked against the actual month length (leap years included).
    ///
    /// # Errors
    /// Returns the `FieldError` for the first component out of range.
    pub fn from_segments(
        year: u16,
        month: u16,
        day: u16,
        hour: u16,
        minute: u16,
        second: u16,
        millisecond: u16,
    ) -> Result<Self, FieldError> {
        let year = check_year(year)?;
        let month = check_month(month)?;
        let day = check_day(year, month, day)?;
        let hour = check_hour(hour)?;
        let minute = check_minute(minute)?;
        let second = check_second(second)?;
        let millisecond = check_millisecond(millisecond)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Returns the year (1-9999)
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month (1-31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour (0-23)
    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59)
    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59)
    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Returns the millisecond (0-999)
    #[inline]
    pub const fn millisecond(self) -> u16 {
        self.millisecond
    }

    /// Reads the component a segment type maps to, widened to `u16`.
    /// Total over the closed segment enum; this is how a value is
    /// decomposed back into segments.
    pub const fn field(self, segment: SegmentType) -> u16 {
        match segment {
            SegmentType::Year => self.year,
            SegmentType::Month => self.month as u16,
            SegmentType::Day => self.day as u16,
            SegmentType::Hour => self.hour as u16,
            SegmentType::Minute => self.minute as u16,
            SegmentType::Second => self.second as u16,
            SegmentType::Millisecond => self.millisecond,
        }
    }
}

// --- per-component validation helpers ---

fn check_year(value: u16) -> Result<u16, FieldError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
        return Err(FieldError::InvalidYear(value));
    }
    Ok(value)
}

fn check_month(value: u16) -> Result<u8, FieldError> {
    if !(1..=MAX_MONTH).contains(&value) {
        return Err(FieldError::InvalidMonth(value));
    }
    Ok(value as u8)
}

fn check_day(year: u16, month: u8, value: u16) -> Result<u8, FieldError> {
    let max = u16::from(days_in_month(year, month));
    if !(MIN_DAY..=max).contains(&value) {
        return Err(FieldError::InvalidDay {
            year,
            month: u16::from(month),
            day: value,
        });
    }
    Ok(value as u8)
}

fn check_hour(value: u16) -> Result<u8, FieldError> {
    if value > MAX_HOUR {
        return Err(FieldError::InvalidHour(value));
    }
    Ok(value as u8)
}

fn check_minute(value: u16) -> Result<u8, FieldError> {
    if value > MAX_MINUTE {
        return Err(FieldError::InvalidMinute(value));
    }
    Ok(value as u8)
}

fn check_second(value: u16) -> Result<u8, FieldError> {
    if value > MAX_SECOND {
        return Err(FieldError::InvalidSecond(value));
    }
    Ok(value as u8)
}

fn check_millisecond(value: u16) -> Result<u16, FieldError> {
    if value > MAX_MILLISECOND {
        return Err(FieldError::InvalidMillisecond(value));
    }
    Ok(value)
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

impl FromStr for WallClock {
    type Err = FieldError;

    /// Parses `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS`, or
    /// `YYYY-MM-DDTHH:MM:SS.mmm`. Components omitted by a coarser form
    /// default to zero. Separators are strict.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FieldError::EmptyInput);
        }

        let (date_part, time_part) =
            trimmed
                .split_once(DATETIME_SEPARATOR)
                .ok_or_else(|| {
                    FieldError::InvalidFormat(format!(
                        "Missing '{DATETIME_SEPARATOR}' between date and time: {trimmed}"
                    ))
                })?;

        let (year, month, day) = parse_date_part(date_part)?;
        let (hour, minute, second, millisecond) = parse_time_part(time_part)?;

        Self::from_segments(year, month, day, hour, minute, second, millisecond)
    }
}

/// Helper to parse one numeric component with a useful error
fn parse_component(s: &str) -> Result<u16, FieldError> {
    s.parse::<u16>()
        .map_err(|_| FieldError::InvalidFormat(s.to_owned()))
}

/// Parses the `YYYY-MM-DD` half
fn parse_date_part(part: &str) -> Result<(u16, u16, u16), FieldError> {
    let pieces: Vec<&str> = part.split(DATE_SEPARATOR).map(str::trim).collect();
    if pieces.len() != 3 {
        return Err(FieldError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found: {part}"
        )));
    }
    let year = parse_component(pieces[0])?;
    let month = parse_component(pieces[1])?;
    let day = parse_component(pieces[2])?;
    Ok((year, month, day))
}

/// Parses the `HH:MM[:SS[.mmm]]` half
fn parse_time_part(part: &str) -> Result<(u16, u16, u16, u16), FieldError> {
    let (clock, fraction) = match part.split_once(FRACTION_SEPARATOR) {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (part, None),
    };

    let pieces: Vec<&str> = clock.split(TIME_SEPARATOR).map(str::trim).collect();
    let (hour, minute, second) = match pieces.len() {
        2 => {
            if fraction.is_some() {
                return Err(FieldError::InvalidFormat(format!(
                    "Fractional seconds require a seconds component: {part}"
                )));
            }
            (parse_component(pieces[0])?, parse_component(pieces[1])?, 0)
        }
        3 => (
            parse_component(pieces[0])?,
            parse_component(pieces[1])?,
            parse_component(pieces[2])?,
        ),
        _ => {
            return Err(FieldError::InvalidFormat(format!(
                "Expected HH{TIME_SEPARATOR}MM or HH{TIME_SEPARATOR}MM{TIME_SEPARATOR}SS, found: {part}"
            )));
        }
    };

    let millisecond = match fraction {
        Some(digits) => {
            // Exactly three digits so ".5" cannot silently mean 5ms or 500ms
            let digits = digits.trim();
            if digits.len() != 3 {
                return Err(FieldError::InvalidFormat(format!(
                    "Fractional seconds must be exactly three digits: {part}"
                )));
            }
            parse_component(digits)?
        }
        None => 0,
    };

    Ok((hour, minute, second, millisecond))
}

impl serde::Serialize for WallClock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for WallClock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
