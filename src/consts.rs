/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u16 = 12;

/// First day of month
pub const MIN_DAY: u16 = 1;

/// Maximum numeric day value any month can reach
pub const MAX_DAY: u16 = 31;

/// Maximum valid hour (wall-clock, 24-hour form)
pub const MAX_HOUR: u16 = 23;

/// Maximum valid minute
pub const MAX_MINUTE: u16 = 59;

/// Maximum valid second
pub const MAX_SECOND: u16 = 59;

/// Maximum valid millisecond
pub const MAX_MILLISECOND: u16 = 999;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the date and time halves (ISO 8601 format)
pub const DATETIME_SEPARATOR: char = 'T';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator before the fractional-second component
pub const FRACTION_SEPARATOR: char = '.';

/// Fill character shown for a segment with no value entered yet
pub const PLACEHOLDER_FILL: char = '-';
