use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_HOUR, MAX_MILLISECOND, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR, MIN_DAY,
    MIN_YEAR, PLACEHOLDER_FILL,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// One editable field of a composite date-time value.
///
/// The variants are declared in editing order: focus moves Year → Month →
/// Day → Hour → Minute → Second → Millisecond.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
}

/// Inclusive numeric limits for one segment type.
///
/// Purely numeric: Day is always 1..=31 here, day-in-month validity is
/// checked when a composite value is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentBounds {
    pub min: u16,
    pub max: u16,
}

impl SegmentBounds {
    /// Returns true if `value` lies within the inclusive limits
    #[inline]
    pub const fn contains(self, value: u16) -> bool {
        self.min <= value && value <= self.max
    }

    /// Forces `value` into the inclusive limits
    #[inline]
    pub const fn clamp(self, value: u16) -> u16 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl SegmentType {
    /// Number of segment types
    pub const COUNT: usize = 7;

    /// Every segment type, in editing order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
    ];

    /// Position of this segment in the editing order, usable as an array index
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Inclusive numeric limits for this segment type
    pub const fn bounds(self) -> SegmentBounds {
        match self {
            Self::Year => SegmentBounds {
                min: MIN_YEAR,
                max: MAX_YEAR,
            },
            Self::Month => SegmentBounds {
                min: 1,
                max: MAX_MONTH,
            },
            Self::Day => SegmentBounds {
                min: MIN_DAY,
                max: MAX_DAY,
            },
            Self::Hour => SegmentBounds {
                min: 0,
                max: MAX_HOUR,
            },
            Self::Minute => SegmentBounds {
                min: 0,
                max: MAX_MINUTE,
            },
            Self::Second => SegmentBounds {
                min: 0,
                max: MAX_SECOND,
            },
            Self::Millisecond => SegmentBounds {
                min: 0,
                max: MAX_MILLISECOND,
            },
        }
    }

    /// Number of digits in this segment's widest value; also the display width
    pub const fn max_digits(self) -> usize {
        match self {
            Self::Year => 4,
            Self::Millisecond => 3,
            Self::Month | Self::Day | Self::Hour | Self::Minute | Self::Second => 2,
        }
    }

    /// The segment after this one in editing order, `None` past Millisecond
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Year => Some(Self::Month),
            Self::Month => Some(Self::Day),
            Self::Day => Some(Self::Hour),
            Self::Hour => Some(Self::Minute),
            Self::Minute => Some(Self::Second),
            Self::Second => Some(Self::Millisecond),
            Self::Millisecond => None,
        }
    }

    /// Renders `value` zero-padded to this segment's display width
    pub fn pad(self, value: u16) -> String {
        format!("{:0width$}", value, width = self.max_digits())
    }

    /// Placeholder string shown while this segment has no value
    pub fn placeholder(self) -> String {
        PLACEHOLDER_FILL.to_string().repeat(self.max_digits())
    }
}

/// The finest unit of precision an editing session collects.
///
/// Segments finer than the configured accuracy are forced to zero and are
/// not required for completeness. Ordered coarse to fine:
/// `Minute < Second < Millisecond`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    #[default]
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
}

impl Accuracy {
    /// Whether `segment` is collected at this accuracy.
    ///
    /// Year through Minute are always collected; Second requires at least
    /// second accuracy; Millisecond requires millisecond accuracy.
    pub const fn includes(self, segment: SegmentType) -> bool {
        match segment {
            SegmentType::Second => matches!(self, Self::Second | Self::Millisecond),
            SegmentType::Millisecond => matches!(self, Self::Millisecond),
            SegmentType::Year
            | SegmentType::Month
            | SegmentType::Day
            | SegmentType::Hour
            | SegmentType::Minute => true,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month as u16 <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
