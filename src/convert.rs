//! Weight and height unit conversions, rounded to one decimal place.
//!
//! Inputs are not validated. Round trips drift by at most one rounding step.

use serde::{Deserialize, Serialize};

use crate::consts::{CM_PER_IN, IN_PER_CM, KG_PER_LB, LB_PER_KG};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum WeightUnit {
    #[display(fmt = "kg")]
    #[serde(rename = "kg")]
    Kilograms,
    #[display(fmt = "lbs")]
    #[serde(rename = "lbs")]
    Pounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum HeightUnit {
    #[display(fmt = "cm")]
    #[serde(rename = "cm")]
    Centimetres,
    #[display(fmt = "inches")]
    #[serde(rename = "inches")]
    Inches,
}

/// Rounds half away from zero to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn kg_to_lb(kg: f64) -> f64 {
    round_to_tenth(kg * LB_PER_KG)
}

pub fn lb_to_kg(lb: f64) -> f64 {
    round_to_tenth(lb * KG_PER_LB)
}

pub fn cm_to_in(cm: f64) -> f64 {
    round_to_tenth(cm * IN_PER_CM)
}

pub fn in_to_cm(inches: f64) -> f64 {
    round_to_tenth(inches * CM_PER_IN)
}

/// Converts `value` between weight units; the same unit returns it untouched.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Kilograms, WeightUnit::Pounds) => kg_to_lb(value),
        (WeightUnit::Pounds, WeightUnit::Kilograms) => lb_to_kg(value),
        _ => value,
    }
}

/// Converts `value` between height units; the same unit returns it untouched.
pub fn convert_height(value: f64, from: HeightUnit, to: HeightUnit) -> f64 {
    match (from, to) {
        (HeightUnit::Centimetres, HeightUnit::Inches) => cm_to_in(value),
        (HeightUnit::Inches, HeightUnit::Centimetres) => in_to_cm(value),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_STEP: f64 = 0.1 + 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_known_values() {
        assert_close(kg_to_lb(70.0), 154.3);
        assert_close(lb_to_kg(150.0), 68.0);
        assert_close(cm_to_in(175.0), 68.9);
        assert_close(in_to_cm(65.0), 165.1);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_close(round_to_tenth(0.25), 0.3);
        assert_close(round_to_tenth(-0.25), -0.3);
        assert_close(round_to_tenth(22.857), 22.9);
        assert_close(round_to_tenth(22.84), 22.8);
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_close(
            convert_weight(72.345, WeightUnit::Kilograms, WeightUnit::Kilograms),
            72.345,
        );
        assert_close(
            convert_height(61.27, HeightUnit::Inches, HeightUnit::Inches),
            61.27,
        );
    }

    #[test]
    fn test_dispatch_matches_helpers() {
        assert_close(
            convert_weight(80.0, WeightUnit::Kilograms, WeightUnit::Pounds),
            kg_to_lb(80.0),
        );
        assert_close(
            convert_weight(176.4, WeightUnit::Pounds, WeightUnit::Kilograms),
            lb_to_kg(176.4),
        );
        assert_close(
            convert_height(180.0, HeightUnit::Centimetres, HeightUnit::Inches),
            cm_to_in(180.0),
        );
        assert_close(
            convert_height(70.0, HeightUnit::Inches, HeightUnit::Centimetres),
            in_to_cm(70.0),
        );
    }

    #[test]
    fn test_weight_round_trip_within_one_step() {
        for tenths in 200..=3000 {
            let kg = f64::from(tenths) / 10.0;
            let back = lb_to_kg(kg_to_lb(kg));
            assert!((back - kg).abs() <= ONE_STEP, "{kg} kg came back as {back}");
        }
    }

    #[test]
    fn test_height_round_trip_within_one_step() {
        for tenths in 1000..=2500 {
            let cm = f64::from(tenths) / 10.0;
            let back = in_to_cm(cm_to_in(cm));
            assert!((back - cm).abs() <= ONE_STEP, "{cm} cm came back as {back}");
        }
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(WeightUnit::Pounds.to_string(), "lbs");
        assert_eq!(HeightUnit::Inches.to_string(), "inches");
        assert_eq!(serde_json::to_string(&WeightUnit::Kilograms).unwrap(), r#""kg""#);
    }
}
