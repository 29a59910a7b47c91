//! Birth-date input, parsing and validation.
//!
//! A [`DateTriple`] is whatever the user typed. [`validate`] turns it into a
//! [`BirthDate`] after checking the year window, the month, the month length
//! (leap-year aware) and that the date is not after the reference instant.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DATE_SEPARATOR, MIN_YEAR, SLASH_SEPARATOR};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::ErrorKind;

/// Day, month and year as entered, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct DateTriple {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

/// Textual layouts accepted by [`DateTriple::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum DateFormat {
    #[display(fmt = "DD/MM/YYYY")]
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[display(fmt = "MM/DD/YYYY")]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[default]
    #[display(fmt = "YYYY-MM-DD")]
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

impl DateFormat {
    const fn separator(self) -> char {
        match self {
            Self::DayMonthYear | Self::MonthDayYear => SLASH_SEPARATOR,
            Self::Iso => DATE_SEPARATOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,

    #[error("Year must be between {min} and {max}")]
    YearOutOfRange { year: i32, min: u16, max: i32 },

    #[error("Month must be between 1 and 12")]
    MonthOutOfRange(i32),

    #[error("Day must be between 1 and {max} for the selected month")]
    DayOutOfRange { day: i32, month: u8, year: u16, max: u8 },

    #[error("Birth date cannot be in the future")]
    FutureDate {
        date: NaiveDate,
        reference: NaiveDateTime,
    },
}

impl DateError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) | Self::EmptyInput => ErrorKind::InvalidInput,
            Self::YearOutOfRange { .. } | Self::MonthOutOfRange(_) | Self::DayOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            Self::FutureDate { .. } => ErrorKind::FutureDate,
        }
    }
}

impl DateTriple {
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Parses text laid out as `format`. Only the shape is checked here;
    /// ranges are left to [`validate`].
    ///
    /// # Errors
    /// Returns `DateError::EmptyInput` for blank input and
    /// `DateError::InvalidFormat` for wrong delimiters, a wrong component
    /// count or non-numeric components.
    pub fn parse(s: &str, format: DateFormat) -> Result<Self, DateError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let separator = format.separator();
        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [a, b, c] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected 3 components separated by '{separator}', found {}",
                parts.len()
            )));
        };

        let (a, b, c) = (Self::parse_i32(a)?, Self::parse_i32(b)?, Self::parse_i32(c)?);
        Ok(match format {
            DateFormat::DayMonthYear => Self::new(a, b, c),
            DateFormat::MonthDayYear => Self::new(b, a, c),
            DateFormat::Iso => Self::new(c, b, a),
        })
    }

    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, DateError> {
        s.parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for DateTriple {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DateFormat::Iso)
    }
}

impl From<NaiveDate> for DateTriple {
    fn from(date: NaiveDate) -> Self {
        // chrono keeps month and day well inside i32
        let month = i32::try_from(date.month()).unwrap_or_default();
        let day = i32::try_from(date.day()).unwrap_or_default();
        Self::new(day, month, date.year())
    }
}

/// A calendar date that passed structural validation: year within
/// `MIN_YEAR..=MAX_YEAR`, month within 1..=12, day within the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{_0}")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Builds a date from its components without consulting any clock.
    ///
    /// # Errors
    /// Returns the first out-of-range component, checked year, month, day.
    pub fn new(triple: DateTriple) -> Result<Self, DateError> {
        let year = Year::new(triple.year)?;
        let month = Month::new(triple.month)?;
        let day = Day::new(triple.day, year, month)?;

        NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(day.get()),
        )
        .map(Self)
        .ok_or_else(|| DateError::DayOutOfRange {
            day: triple.day,
            month: month.get(),
            year: year.get(),
            max: 0,
        })
    }

    /// # Errors
    /// Returns `DateError::YearOutOfRange` for dates before `MIN_YEAR` or after `MAX_YEAR`.
    pub fn from_naive(date: NaiveDate) -> Result<Self, DateError> {
        Self::new(DateTriple::from(date))
    }

    pub const fn date(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Midnight at the start of the date.
    pub const fn start(self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

impl From<BirthDate> for DateTriple {
    fn from(date: BirthDate) -> Self {
        Self::from(date.0)
    }
}

impl TryFrom<DateTriple> for BirthDate {
    type Error = DateError;

    fn try_from(triple: DateTriple) -> Result<Self, Self::Error> {
        Self::new(triple)
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let triple: DateTriple = s.parse().map_err(serde::de::Error::custom)?;
        Self::new(triple).map_err(serde::de::Error::custom)
    }
}

/// Checks a user-entered date against the reference instant.
///
/// Checks run in order (year window, month, day, not in the future) and the
/// first failure is returned. The year window is `MIN_YEAR` up to the
/// reference instant's year.
///
/// # Errors
/// `YearOutOfRange`, `MonthOutOfRange` and `DayOutOfRange` for impossible
/// components, `FutureDate` when the date falls after `reference`.
pub fn validate(triple: DateTriple, reference: NaiveDateTime) -> Result<BirthDate, DateError> {
    let result = check(triple, reference);
    if let Err(err) = &result {
        debug!(%triple, %reference, error = %err, "birth date rejected");
    }
    result
}

fn check(triple: DateTriple, reference: NaiveDateTime) -> Result<BirthDate, DateError> {
    let max_year = reference.year();
    if triple.year < i32::from(MIN_YEAR) || triple.year > max_year {
        return Err(DateError::YearOutOfRange {
            year: triple.year,
            min: MIN_YEAR,
            max: max_year,
        });
    }

    let date = BirthDate::new(triple)?;
    if date.start() > reference {
        return Err(DateError::FutureDate {
            date: date.date(),
            reference,
        });
    }
    Ok(date)
}

/// Convenience wrapper over [`validate`] for callers that only need a yes/no.
pub fn is_valid(triple: DateTriple, reference: NaiveDateTime) -> bool {
    check(triple, reference).is_ok()
}
