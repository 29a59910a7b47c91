//! Calendar-accurate age and next-birthday countdown.
//!
//! Chrono has no year/month/day difference (nothing like Python's
//! `relativedelta`), so the breakdown applies the borrowing rules by hand.
//! A day underflow borrows the length of the month before the reference
//! month, and a month underflow borrows twelve months from the year.
//!
//! Totals are derived from the elapsed instant instead, so `total_days` is
//! never a division of the calendar breakdown. Hours, minutes and seconds are
//! `total_days` scaled up, so they only have day resolution.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{
    DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, HOURS_PER_DAY, JANUARY, MARCH, MAX_YEAR,
    MILLIS_PER_DAY, MINUTES_PER_HOUR, MIN_DAY, MIN_YEAR, MONTHS_PER_YEAR, SECONDS_PER_MINUTE,
};
use crate::date::{self, BirthDate, DateError, DateTriple};
use crate::prelude::*;
use crate::types::{days_in_month, previous_month};
use crate::ErrorKind;

/// Where a 29 February birthday falls in a year without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum LeapDayPolicy {
    /// The day after 28 February, i.e. 1 March.
    #[default]
    #[display(fmt = "1 March")]
    March1,
    #[display(fmt = "28 February")]
    February28,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeOptions {
    pub leap_day: LeapDayPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    #[error(transparent)]
    InvalidInput(DateError),

    #[error("Birth date cannot be in the future")]
    FutureDate {
        birth: NaiveDate,
        now: NaiveDateTime,
    },
}

impl AgeError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(err) => err.kind(),
            Self::FutureDate { .. } => ErrorKind::FutureDate,
        }
    }
}

impl From<DateError> for AgeError {
    fn from(err: DateError) -> Self {
        match err {
            DateError::FutureDate { date, reference } => Self::FutureDate {
                birth: date,
                now: reference,
            },
            other => Self::InvalidInput(other),
        }
    }
}

/// The next occurrence of the birthday strictly after the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NextBirthday {
    pub date: NaiveDate,
    /// Whole days until the birthday starts, rounded up.
    pub days_until: u64,
    pub weekday: Weekday,
}

impl NextBirthday {
    /// English weekday name, e.g. "Monday".
    pub const fn day_of_week(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: u64,
    pub total_weeks: u64,
    pub total_months: u64,
    pub total_hours: u64,
    pub total_minutes: u64,
    pub total_seconds: u64,
    pub next_birthday: NextBirthday,
}

/// A single figure an age can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    #[display(fmt = "years")]
    Years,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "seconds")]
    Seconds,
}

impl AgeBreakdown {
    pub fn in_unit(&self, unit: AgeUnit) -> u64 {
        match unit {
            AgeUnit::Years => u64::from(self.years),
            AgeUnit::Months => self.total_months,
            AgeUnit::Days => self.total_days,
            AgeUnit::Hours => self.total_hours,
            AgeUnit::Minutes => self.total_minutes,
            AgeUnit::Seconds => self.total_seconds,
        }
    }

    pub const fn is_birthday_today(&self) -> bool {
        self.months == 0 && self.days == 0
    }
}

const fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl fmt::Display for AgeBreakdown {
    /// "25 years, 3 months, and 1 day"; zero parts are left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{n} {unit}{}", plural(n)))
        .collect();

        match parts.as_slice() {
            [] => f.write_str("Born today!"),
            [only] => f.write_str(only),
            [first, second] => write!(f, "{first} and {second}"),
            [init @ .., last] => write!(f, "{}, and {last}", init.join(", ")),
        }
    }
}

/// Age at `now` with the default [`AgeOptions`].
///
/// # Errors
/// `AgeError::InvalidInput` when the triple fails validation,
/// `AgeError::FutureDate` when it falls after `now`.
pub fn compute_age(birth: DateTriple, now: NaiveDateTime) -> Result<AgeBreakdown, AgeError> {
    compute_age_with(birth, now, &AgeOptions::default())
}

/// Age as of the local wall clock.
///
/// # Errors
/// See [`compute_age`].
pub fn compute_age_now(birth: DateTriple) -> Result<AgeBreakdown, AgeError> {
    compute_age(birth, Local::now().naive_local())
}

/// # Errors
/// See [`compute_age`].
pub fn compute_age_with(
    birth: DateTriple,
    now: NaiveDateTime,
    options: &AgeOptions,
) -> Result<AgeBreakdown, AgeError> {
    let birth = date::validate(birth, now)?;
    age_of(birth, now, options)
}

/// Age of an already validated date. The date is still checked against
/// `now` since it may have been validated against another instant.
///
/// # Errors
/// `AgeError::FutureDate` when `birth` falls after `now`; `InvalidInput`
/// when the next birthday would fall outside the supported years.
pub fn age_of(
    birth: BirthDate,
    now: NaiveDateTime,
    options: &AgeOptions,
) -> Result<AgeBreakdown, AgeError> {
    if birth.start() > now {
        return Err(AgeError::FutureDate {
            birth: birth.date(),
            now,
        });
    }

    let (years, months, days) = calendar_difference(birth.date(), now.date());

    let total_days = to_u64((now - birth.start()).num_days());
    let total_hours = total_days * to_u64(HOURS_PER_DAY);
    let total_minutes = total_hours * to_u64(MINUTES_PER_HOUR);
    let breakdown = AgeBreakdown {
        years,
        months,
        days,
        total_days,
        total_weeks: total_days / to_u64(DAYS_PER_WEEK),
        total_months: u64::from(years) * to_u64(MONTHS_PER_YEAR) + u64::from(months),
        total_hours,
        total_minutes,
        total_seconds: total_minutes * to_u64(SECONDS_PER_MINUTE),
        next_birthday: next_birthday(birth.date(), now, options.leap_day)?,
    };

    debug!(
        %birth,
        %now,
        years,
        months,
        days,
        total_days,
        days_until_birthday = breakdown.next_birthday.days_until,
        "age computed"
    );
    Ok(breakdown)
}

// Only called with non-negative values
fn to_u64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or_default()
}

/// Years, months and days from `birth` to `today`, `birth <= today`.
fn calendar_difference(birth: NaiveDate, today: NaiveDate) -> (u32, u32, u32) {
    let mut years = i64::from(today.year()) - i64::from(birth.year());
    let mut months = i64::from(today.month()) - i64::from(birth.month());
    let mut days = i64::from(today.day()) - i64::from(birth.day());

    // Fix day underflow. A second borrow is needed when the preceding month
    // is shorter than the birth day (31 January to 1 March).
    let (mut borrow_year, mut borrow_month) = (today.year(), month_u8(today));
    while days < 0 {
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        let borrowed = days_in_month(borrow_year, borrow_month);
        months -= 1;
        days += i64::from(borrowed);
        trace!(borrow_year, borrow_month, borrowed, days, "borrowed days from month");
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += MONTHS_PER_YEAR;
    }

    (to_u32(years), to_u32(months), to_u32(days))
}

fn month_u8(date: NaiveDate) -> u8 {
    u8::try_from(date.month()).unwrap_or(JANUARY)
}

/// The birthday falling in `year`, moving 29 February per `policy` when
/// `year` has no leap day.
fn anniversary(birth: NaiveDate, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
    let exact = NaiveDate::from_ymd_opt(year, birth.month(), birth.day());
    if exact.is_some() || !is_leap_day(birth) {
        return exact;
    }

    match policy {
        LeapDayPolicy::March1 => NaiveDate::from_ymd_opt(year, u32::from(MARCH), u32::from(MIN_DAY)),
        LeapDayPolicy::February28 => NaiveDate::from_ymd_opt(
            year,
            u32::from(FEBRUARY),
            u32::from(FEBRUARY_DAYS_LEAP - 1),
        ),
    }
}

fn is_leap_day(date: NaiveDate) -> bool {
    date.month() == u32::from(FEBRUARY) && date.day() == u32::from(FEBRUARY_DAYS_LEAP)
}

fn next_birthday(
    birth: NaiveDate,
    now: NaiveDateTime,
    policy: LeapDayPolicy,
) -> Result<NextBirthday, AgeError> {
    let out_of_range = |year: i32| {
        AgeError::InvalidInput(DateError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: i32::from(MAX_YEAR),
        })
    };

    let this_year = now.year();
    let mut candidate = anniversary(birth, this_year, policy).ok_or_else(|| out_of_range(this_year))?;
    // A birthday that has already started counts as passed
    if candidate.and_time(NaiveTime::MIN) <= now {
        let next_year = this_year + 1;
        candidate = anniversary(birth, next_year, policy).ok_or_else(|| out_of_range(next_year))?;
    }

    let remaining = (candidate.and_time(NaiveTime::MIN) - now).num_milliseconds();
    let days_until = to_u64((remaining + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY);

    Ok(NextBirthday {
        date: candidate,
        days_until,
        weekday: candidate.weekday(),
    })
}
