//! Calendar-accurate age arithmetic, BMI classification and the static
//! health reference tables that go with them.
//!
//! ```
//! use chrono::NaiveDate;
//! use health_calc::{compute_age, compute_bmi, BmiCategory, BmiMeasurement, DateTriple};
//!
//! let now = NaiveDate::from_ymd_opt(2025, 1, 1)
//!     .and_then(|d| d.and_hms_opt(0, 0, 0))
//!     .unwrap();
//! let age = compute_age(DateTriple::new(1, 1, 2000), now).unwrap();
//! assert_eq!(age.years, 25);
//!
//! let bmi = compute_bmi(&BmiMeasurement::metric(70.0, 175.0)).unwrap();
//! assert_eq!(bmi.category, BmiCategory::Normal);
//! ```

mod consts;
mod prelude;

pub mod age;
pub mod bmi;
pub mod catalog;
pub mod convert;
pub mod date;
pub mod types;

pub use age::{
    AgeBreakdown, AgeError, AgeOptions, AgeUnit, LeapDayPolicy, NextBirthday, age_of, compute_age,
    compute_age_now, compute_age_with,
};
pub use bmi::{
    BmiAssessment, BmiCategory, BmiError, BmiLimits, BmiMeasurement, Bounds, Quantity, UnitLimits,
    UnitSystem, WeightRange, compute_bmi, compute_bmi_with, healthy_weight_range,
};
pub use consts::*;
pub use convert::{
    HeightUnit, WeightUnit, cm_to_in, convert_height, convert_weight, in_to_cm, kg_to_lb, lb_to_kg,
};
pub use date::{BirthDate, DateError, DateFormat, DateTriple, is_valid, validate};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use serde::Serialize;

use crate::prelude::*;

/// Coarse classification shared by every error type in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed, missing or non-physical input.
    #[display(fmt = "invalid input")]
    InvalidInput,
    /// A date component outside its calendar or configured window.
    #[display(fmt = "out of range")]
    OutOfRange,
    /// A birth date after the reference instant.
    #[display(fmt = "future date")]
    FutureDate,
}
