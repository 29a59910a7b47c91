//! Body Mass Index calculation and classification.
//!
//! Measurements carry an explicit unit system: metric is kilograms and
//! centimetres, imperial is pounds and inches. Everything is normalised to
//! kilograms and metres before the ratio is taken.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::categories::{self, BmiCategoryInfo};
use crate::consts::{
    BMI_HEALTHY_MAX, BMI_NORMAL_MIN, BMI_OBESE_I_MIN, BMI_OBESE_II_MIN, BMI_OBESE_III_MIN,
    BMI_OVERWEIGHT_MIN, CM_PER_M, IMPERIAL_HEIGHT_MAX_IN, IMPERIAL_HEIGHT_MIN_IN,
    IMPERIAL_WEIGHT_MAX_LB, IMPERIAL_WEIGHT_MIN_LB, KG_PER_LB, LB_PER_KG, METRIC_HEIGHT_MAX_CM,
    METRIC_HEIGHT_MIN_CM, METRIC_WEIGHT_MAX_KG, METRIC_WEIGHT_MIN_KG, M_PER_IN,
};
use crate::convert::{round_to_tenth, HeightUnit, WeightUnit};
use crate::prelude::*;
use crate::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimetres
    #[default]
    #[display(fmt = "metric")]
    Metric,
    /// Pounds and inches
    #[display(fmt = "imperial")]
    Imperial,
}

impl UnitSystem {
    pub const fn weight_unit(self) -> WeightUnit {
        match self {
            Self::Metric => WeightUnit::Kilograms,
            Self::Imperial => WeightUnit::Pounds,
        }
    }

    pub const fn height_unit(self) -> HeightUnit {
        match self {
            Self::Metric => HeightUnit::Centimetres,
            Self::Imperial => HeightUnit::Inches,
        }
    }

    /// Factor taking a height in this system to metres.
    const fn metres_per_height_unit(self) -> f64 {
        match self {
            Self::Metric => 1.0 / CM_PER_M,
            Self::Imperial => M_PER_IN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiMeasurement {
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub unit: UnitSystem,
}

impl BmiMeasurement {
    pub const fn metric(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight: weight_kg,
            height: height_cm,
            unit: UnitSystem::Metric,
        }
    }

    pub const fn imperial(weight_lb: f64, height_in: f64) -> Self {
        Self {
            weight: weight_lb,
            height: height_in,
            unit: UnitSystem::Imperial,
        }
    }

    /// (kilograms, metres)
    pub fn to_metric(&self) -> (f64, f64) {
        let kg = match self.unit {
            UnitSystem::Metric => self.weight,
            UnitSystem::Imperial => self.weight * KG_PER_LB,
        };
        (kg, self.height * self.unit.metres_per_height_unit())
    }
}

/// The six WHO adult bands, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    #[serde(rename = "obese_class_1")]
    ObeseClassI,
    #[serde(rename = "obese_class_2")]
    ObeseClassII,
    #[serde(rename = "obese_class_3")]
    ObeseClassIII,
}

impl BmiCategory {
    pub const ALL: [Self; 6] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::ObeseClassI,
        Self::ObeseClassII,
        Self::ObeseClassIII,
    ];

    /// Half-open bands: each lower bound is inclusive, so 25.0 is overweight.
    pub fn classify(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_MIN {
            Self::Underweight
        } else if bmi < BMI_OVERWEIGHT_MIN {
            Self::Normal
        } else if bmi < BMI_OBESE_I_MIN {
            Self::Overweight
        } else if bmi < BMI_OBESE_II_MIN {
            Self::ObeseClassI
        } else if bmi < BMI_OBESE_III_MIN {
            Self::ObeseClassII
        } else {
            Self::ObeseClassIII
        }
    }

    pub const fn is_obese(self) -> bool {
        matches!(
            self,
            Self::ObeseClassI | Self::ObeseClassII | Self::ObeseClassIII
        )
    }

    pub fn info(self) -> &'static BmiCategoryInfo {
        categories::info(self)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().label)
    }
}

/// Inclusive bounds on a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitLimits {
    pub weight: Bounds,
    pub height: Bounds,
}

/// Plausible measurement ranges per unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiLimits {
    pub metric: UnitLimits,
    pub imperial: UnitLimits,
}

impl Default for BmiLimits {
    fn default() -> Self {
        Self {
            metric: UnitLimits {
                weight: Bounds::new(METRIC_WEIGHT_MIN_KG, METRIC_WEIGHT_MAX_KG),
                height: Bounds::new(METRIC_HEIGHT_MIN_CM, METRIC_HEIGHT_MAX_CM),
            },
            imperial: UnitLimits {
                weight: Bounds::new(IMPERIAL_WEIGHT_MIN_LB, IMPERIAL_WEIGHT_MAX_LB),
                height: Bounds::new(IMPERIAL_HEIGHT_MIN_IN, IMPERIAL_HEIGHT_MAX_IN),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    #[display(fmt = "weight")]
    Weight,
    #[display(fmt = "height")]
    Height,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BmiError {
    #[error("Please enter a valid {quantity}")]
    NotFinite { quantity: Quantity },

    #[error("Please enter a valid {quantity}")]
    NonPositive { quantity: Quantity, value: f64 },

    #[error("Weight should be between {}-{} {unit}", .bounds.min, .bounds.max)]
    WeightOutOfRange {
        value: f64,
        bounds: Bounds,
        unit: WeightUnit,
    },

    #[error("Height should be between {}-{} {unit}", .bounds.min, .bounds.max)]
    HeightOutOfRange {
        value: f64,
        bounds: Bounds,
        unit: HeightUnit,
    },
}

impl BmiError {
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

impl BmiLimits {
    pub const fn for_unit(&self, unit: UnitSystem) -> &UnitLimits {
        match unit {
            UnitSystem::Metric => &self.metric,
            UnitSystem::Imperial => &self.imperial,
        }
    }

    /// Rejects non-finite, non-positive and implausible measurements,
    /// weight first.
    ///
    /// # Errors
    /// Returns the first `BmiError` found.
    pub fn check(&self, measurement: &BmiMeasurement) -> Result<(), BmiError> {
        for (quantity, value) in [
            (Quantity::Weight, measurement.weight),
            (Quantity::Height, measurement.height),
        ] {
            if !value.is_finite() {
                return Err(BmiError::NotFinite { quantity });
            }
            if value <= 0.0 {
                return Err(BmiError::NonPositive { quantity, value });
            }
        }

        let limits = self.for_unit(measurement.unit);
        if !limits.weight.contains(measurement.weight) {
            return Err(BmiError::WeightOutOfRange {
                value: measurement.weight,
                bounds: limits.weight,
                unit: measurement.unit.weight_unit(),
            });
        }
        if !limits.height.contains(measurement.height) {
            return Err(BmiError::HeightOutOfRange {
                value: measurement.height,
                bounds: limits.height,
                unit: measurement.unit.height_unit(),
            });
        }
        Ok(())
    }
}

/// Whole-unit weight range, in the unit of the measurement it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
    pub unit: WeightUnit,
}

impl WeightRange {
    pub fn contains(&self, weight: f64) -> bool {
        (self.min..=self.max).contains(&weight)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// Rounded to one decimal place.
    pub bmi: f64,
    pub category: BmiCategory,
    pub healthy_weight_range: WeightRange,
    pub recommendations: Vec<String>,
}

/// Weights giving a BMI of 18.5 to 24.9 at `height`, rounded to whole
/// kilograms or pounds to match `unit`.
pub fn healthy_weight_range(height: f64, unit: UnitSystem) -> WeightRange {
    let metres = height * unit.metres_per_height_unit();
    let squared = metres * metres;
    let (min_kg, max_kg) = (BMI_NORMAL_MIN * squared, BMI_HEALTHY_MAX * squared);

    let (min, max) = match unit {
        UnitSystem::Metric => (min_kg, max_kg),
        UnitSystem::Imperial => (min_kg * LB_PER_KG, max_kg * LB_PER_KG),
    };
    WeightRange {
        min: min.round(),
        max: max.round(),
        unit: unit.weight_unit(),
    }
}

/// BMI with the default plausibility limits.
///
/// # Errors
/// Returns `BmiError` when the measurement is not a plausible adult one.
pub fn compute_bmi(measurement: &BmiMeasurement) -> Result<BmiAssessment, BmiError> {
    compute_bmi_with(measurement, &BmiLimits::default())
}

/// # Errors
/// Returns `BmiError` when the measurement fails `limits`.
pub fn compute_bmi_with(
    measurement: &BmiMeasurement,
    limits: &BmiLimits,
) -> Result<BmiAssessment, BmiError> {
    if let Err(err) = limits.check(measurement) {
        debug!(?measurement, error = %err, "measurement rejected");
        return Err(err);
    }

    let (kg, metres) = measurement.to_metric();
    let bmi = round_to_tenth(kg / (metres * metres));
    // Classified after rounding so the reported value and band agree
    let category = BmiCategory::classify(bmi);
    let healthy_weight_range = healthy_weight_range(measurement.height, measurement.unit);

    debug!(bmi, %category, unit = %measurement.unit, "bmi computed");
    Ok(BmiAssessment {
        bmi,
        category,
        healthy_weight_range,
        recommendations: category
            .info()
            .recommendations
            .iter()
            .map(|r| (*r).to_owned())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(measurement: BmiMeasurement) -> BmiAssessment {
        compute_bmi(&measurement).unwrap()
    }

    #[test]
    fn test_metric_normal() {
        let result = assess(BmiMeasurement::metric(70.0, 175.0));
        assert!((result.bmi - 22.9).abs() < 1e-9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.healthy_weight_range.min, 57.0);
        assert_eq!(result.healthy_weight_range.max, 76.0);
        assert_eq!(result.healthy_weight_range.unit, WeightUnit::Kilograms);
        assert_eq!(result.recommendations[0], "Maintain current healthy lifestyle");
    }

    #[test]
    fn test_imperial_path() {
        // 150 lb = 68.0388 kg, 65 in = 1.651 m
        let result = assess(BmiMeasurement::imperial(150.0, 65.0));
        assert!((result.bmi - 25.0).abs() < 1e-9);
        assert_eq!(result.category, BmiCategory::Overweight);
        assert_eq!(result.healthy_weight_range.unit, WeightUnit::Pounds);
        assert_eq!(result.healthy_weight_range.min, 111.0);
        assert_eq!(result.healthy_weight_range.max, 150.0);
    }

    #[test]
    fn test_classify_boundaries() {
        struct TestCase {
            bmi: f64,
            expected: BmiCategory,
        }

        let cases = [
            TestCase { bmi: 0.0, expected: BmiCategory::Underweight },
            TestCase { bmi: 18.4, expected: BmiCategory::Underweight },
            TestCase { bmi: 18.5, expected: BmiCategory::Normal },
            TestCase { bmi: 24.9, expected: BmiCategory::Normal },
            TestCase { bmi: 25.0, expected: BmiCategory::Overweight },
            TestCase { bmi: 29.99, expected: BmiCategory::Overweight },
            TestCase { bmi: 30.0, expected: BmiCategory::ObeseClassI },
            TestCase { bmi: 35.0, expected: BmiCategory::ObeseClassII },
            TestCase { bmi: 39.9, expected: BmiCategory::ObeseClassII },
            TestCase { bmi: 40.0, expected: BmiCategory::ObeseClassIII },
            TestCase { bmi: 95.0, expected: BmiCategory::ObeseClassIII },
        ];

        for case in &cases {
            assert_eq!(BmiCategory::classify(case.bmi), case.expected, "bmi {}", case.bmi);
        }
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut previous = BmiCategory::classify(0.0);
        for step in 0..=6000 {
            let bmi = f64::from(step) / 100.0;
            let category = BmiCategory::classify(bmi);
            assert!(category >= previous, "{bmi} went from {previous:?} to {category:?}");
            previous = category;
        }
        assert_eq!(previous, BmiCategory::ObeseClassIII);
    }

    #[test]
    fn test_every_band_reached() {
        let mut seen: Vec<BmiCategory> = (0..=600)
            .map(|tenths| BmiCategory::classify(f64::from(tenths) / 10.0))
            .collect();
        seen.dedup();
        assert_eq!(seen, BmiCategory::ALL);
    }

    #[test]
    fn test_rounded_bmi_decides_band() {
        // 150 lb / 65 in is 24.96 raw, which alone would be normal
        let (kg, metres) = BmiMeasurement::imperial(150.0, 65.0).to_metric();
        let raw = kg / (metres * metres);
        assert!(raw < BMI_OVERWEIGHT_MIN);
        assert_eq!(BmiCategory::classify(raw), BmiCategory::Normal);

        let result = assess(BmiMeasurement::imperial(150.0, 65.0));
        assert!((result.bmi - 25.0).abs() < 1e-9);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_category_matches_reported_bmi() {
        for weight in 40..=200 {
            let result = assess(BmiMeasurement::metric(f64::from(weight), 168.0));
            assert_eq!(result.category, BmiCategory::classify(result.bmi));
        }
    }

    #[test]
    fn test_out_of_range_inputs() {
        let cases = [
            BmiMeasurement::metric(19.9, 170.0),
            BmiMeasurement::metric(300.1, 170.0),
            BmiMeasurement::metric(70.0, 99.0),
            BmiMeasurement::metric(70.0, 1.75),
            BmiMeasurement::metric(70.0, 251.0),
            BmiMeasurement::imperial(43.0, 65.0),
            BmiMeasurement::imperial(661.0, 65.0),
            BmiMeasurement::imperial(150.0, 38.0),
            BmiMeasurement::imperial(150.0, 99.0),
        ];

        for measurement in &cases {
            let err = compute_bmi(measurement).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "{measurement:?}");
        }
    }

    #[test]
    fn test_range_limits_are_inclusive() {
        assert!(compute_bmi(&BmiMeasurement::metric(20.0, 100.0)).is_ok());
        assert!(compute_bmi(&BmiMeasurement::metric(300.0, 250.0)).is_ok());
        assert!(compute_bmi(&BmiMeasurement::imperial(44.0, 98.0)).is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = compute_bmi(&BmiMeasurement::metric(0.0, 170.0)).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid weight");

        let err = compute_bmi(&BmiMeasurement::metric(70.0, -3.0)).unwrap_err();
        assert!(matches!(err, BmiError::NonPositive { quantity: Quantity::Height, .. }));

        let err = compute_bmi(&BmiMeasurement::metric(f64::NAN, 170.0)).unwrap_err();
        assert!(matches!(err, BmiError::NotFinite { quantity: Quantity::Weight }));

        let err = compute_bmi(&BmiMeasurement::metric(400.0, 170.0)).unwrap_err();
        assert_eq!(err.to_string(), "Weight should be between 20-300 kg");

        let err = compute_bmi(&BmiMeasurement::imperial(150.0, 20.0)).unwrap_err();
        assert_eq!(err.to_string(), "Height should be between 39-98 inches");
    }

    #[test]
    fn test_custom_limits() {
        let json = r#"{"metric": {"weight": {"min": 2.0, "max": 300.0}, "height": {"min": 45.0, "max": 250.0}}}"#;
        let limits: BmiLimits = serde_json::from_str(json).unwrap();
        assert_eq!(limits.imperial, BmiLimits::default().imperial);

        let child = BmiMeasurement::metric(12.0, 90.0);
        assert!(compute_bmi(&child).is_err());
        let result = compute_bmi_with(&child, &limits).unwrap();
        assert!((result.bmi - 14.8).abs() < 1e-9);
        assert_eq!(result.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_healthy_range_contains_healthy_weight() {
        let range = healthy_weight_range(180.0, UnitSystem::Metric);
        assert_eq!((range.min, range.max), (60.0, 81.0));
        assert!(range.contains(70.0));
        assert!(!range.contains(90.0));
    }

    #[test]
    fn test_to_metric() {
        let (kg, m) = BmiMeasurement::imperial(100.0, 100.0).to_metric();
        assert!((kg - 45.3592).abs() < 1e-9);
        assert!((m - 2.54).abs() < 1e-9);

        let (kg, m) = BmiMeasurement::metric(80.0, 180.0).to_metric();
        assert!((kg - 80.0).abs() < 1e-9);
        assert!((m - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let measurement = BmiMeasurement::imperial(212.0, 71.0);
        assert_eq!(assess(measurement), assess(measurement));
    }

    #[test]
    fn test_serde_shapes() {
        let measurement: BmiMeasurement =
            serde_json::from_str(r#"{"weight": 150, "height": 65, "unit": "imperial"}"#).unwrap();
        assert_eq!(measurement, BmiMeasurement::imperial(150.0, 65.0));

        let measurement: BmiMeasurement =
            serde_json::from_str(r#"{"weight": 70, "height": 175}"#).unwrap();
        assert_eq!(measurement.unit, UnitSystem::Metric);

        let json = serde_json::to_string(&BmiCategory::ObeseClassII).unwrap();
        assert_eq!(json, r#""obese_class_2""#);
    }

    #[test]
    fn test_category_display_uses_label() {
        assert_eq!(BmiCategory::Normal.to_string(), "Normal Weight");
        assert_eq!(BmiCategory::ObeseClassIII.to_string(), "Obesity Class III");
        assert!(BmiCategory::ObeseClassI.is_obese());
        assert!(!BmiCategory::Overweight.is_obese());
    }
}
