/// Earliest birth year accepted by the validator (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Maximum representable year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

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
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator for the day-first and month-first layouts
pub const SLASH_SEPARATOR: char = '/';

pub const MONTHS_PER_YEAR: i64 = 12;
pub const DAYS_PER_WEEK: i64 = 7;
pub const HOURS_PER_DAY: i64 = 24;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

// BMI band thresholds, lower bound inclusive
pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_I_MIN: f64 = 30.0;
pub const BMI_OBESE_II_MIN: f64 = 35.0;
pub const BMI_OBESE_III_MIN: f64 = 40.0;

/// Upper BMI used for the healthy weight range
pub const BMI_HEALTHY_MAX: f64 = 24.9;

/// Pounds to kilograms
pub const KG_PER_LB: f64 = 0.453_592;
/// Kilograms to pounds
pub const LB_PER_KG: f64 = 2.204_62;
/// Inches to centimetres
pub const CM_PER_IN: f64 = 2.54;
/// Centimetres to inches
pub const IN_PER_CM: f64 = 0.393_701;
/// Inches to metres
pub const M_PER_IN: f64 = 0.0254;
pub const CM_PER_M: f64 = 100.0;

// Plausible measurement limits (inclusive)
pub const METRIC_WEIGHT_MIN_KG: f64 = 20.0;
pub const METRIC_WEIGHT_MAX_KG: f64 = 300.0;
pub const METRIC_HEIGHT_MIN_CM: f64 = 100.0;
pub const METRIC_HEIGHT_MAX_CM: f64 = 250.0;
pub const IMPERIAL_WEIGHT_MIN_LB: f64 = 44.0;
pub const IMPERIAL_WEIGHT_MAX_LB: f64 = 660.0;
pub const IMPERIAL_HEIGHT_MIN_IN: f64 = 39.0;
pub const IMPERIAL_HEIGHT_MAX_IN: f64 = 98.0;
