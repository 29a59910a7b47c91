use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::date::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1900..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the value is outside the range.
    pub fn new(value: i32) -> Result<Self, DateError> {
        let out_of_range = DateError::YearOutOfRange {
            year: value,
            min: MIN_YEAR,
            max: i32::from(MAX_YEAR),
        };
        let narrowed = u16::try_from(value).map_err(|_| out_of_range.clone())?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&narrowed) {
            return Err(out_of_range);
        }
        NonZeroU16::new(narrowed).map(Self).ok_or(out_of_range)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::MonthOutOfRange` if the value is outside `1..=12`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        let narrowed = u8::try_from(value).map_err(|_| DateError::MonthOutOfRange(value))?;
        if narrowed > MAX_MONTH {
            return Err(DateError::MonthOutOfRange(value));
        }
        NonZeroU8::new(narrowed)
            .map(Self)
            .ok_or(DateError::MonthOutOfRange(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `DateError::DayOutOfRange` if the value is 0 or past the end of the month.
    pub fn new(value: i32, year: Year, month: Month) -> Result<Self, DateError> {
        let max = days_in_month(i32::from(year.get()), month.get());
        let out_of_range = DateError::DayOutOfRange {
            day: value,
            month: month.get(),
            year: year.get(),
            max,
        };

        let narrowed = u8::try_from(value).map_err(|_| out_of_range.clone())?;
        if narrowed > max {
            return Err(out_of_range);
        }
        NonZeroU8::new(narrowed).map(Self).ok_or(out_of_range)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No year/month context here, so only the widest month is checked
        let max = DAYS_IN_MONTH[DECEMBER as usize];
        if value < MIN_DAY || value > max {
            return Err(DateError::DayOutOfRange {
                day: i32::from(value),
                month: 0,
                year: 0,
                max,
            });
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or_else(|| DateError::DayOutOfRange {
                day: i32::from(value),
                month: 0,
                year: 0,
                max,
            })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// The (year, month) immediately before the given one.
pub const fn previous_month(year: i32, month: u8) -> (i32, u8) {
    if month == JANUARY {
        (year - 1, DECEMBER)
    } else {
        (year, month - 1)
    }
}
