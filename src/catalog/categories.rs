use serde::Serialize;

use crate::bmi::BmiCategory;

/// Display metadata for one BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BmiCategoryInfo {
    pub category: BmiCategory,
    pub label: &'static str,
    pub range: &'static str,
    /// CSS hex colour
    pub color: &'static str,
    pub description: &'static str,
    pub risks: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

pub fn info(category: BmiCategory) -> &'static BmiCategoryInfo {
    match category {
        BmiCategory::Underweight => &UNDERWEIGHT,
        BmiCategory::Normal => &NORMAL,
        BmiCategory::Overweight => &OVERWEIGHT,
        BmiCategory::ObeseClassI => &OBESE_CLASS_I,
        BmiCategory::ObeseClassII => &OBESE_CLASS_II,
        BmiCategory::ObeseClassIII => &OBESE_CLASS_III,
    }
}

/// All six records, ascending by BMI.
pub fn all() -> impl Iterator<Item = &'static BmiCategoryInfo> {
    BmiCategory::ALL.into_iter().map(info)
}

static UNDERWEIGHT: BmiCategoryInfo = BmiCategoryInfo {
    category: BmiCategory::Underweight,
    label: "Underweight",
    range: "Below 18.5",
    color: "#3b82f6",
    description: "You may be underweight. Consider consulting with a healthcare provider.",
    risks: &[
        "Weakened immune system",
        "Osteoporosis risk",
        "Anemia",
        "Irregular menstrual periods",
    ],
    recommendations: &[
        "Increase caloric intake with nutrient-dense foods",
        "Include healthy fats and proteins",
        "Consider strength training",
        "Consult with a nutritionist",
    ],
};

static NORMAL: BmiCategoryInfo = BmiCategoryInfo {
    category: BmiCategory::Normal,
    label: "Normal Weight",
    range: "18.5 - 24.9",
    color: "#10b981",
    description: "You have a healthy weight. Keep up the good work!",
    risks: &[],
    recommendations: &[
        "Maintain current healthy lifestyle",
        "Continue regular exercise",
        "Eat a balanced diet",
        "Stay hydrated",
    ],
};

static OVERWEIGHT: BmiCategoryInfo = BmiCategoryInfo {
    category: BmiCategory::Overweight,
    label: "Overweight",
    range: "25.0 - 29.9",
    color: "#f59e0b",
    description: "You may be overweight. Consider lifestyle changes for better health.",
    risks: &[
        "Increased risk of heart disease",
        "Type 2 diabetes risk",
        "High blood pressure",
        "Sleep apnea",
    ],
    recommendations: &[
        "Reduce caloric intake by 500-750 calories per day",
        "Increase physical activity",
        "Focus on whole foods",
        "Consider portion control",
    ],
};

static OBESE_CLASS_I: BmiCategoryInfo = BmiCategoryInfo {
    category: BmiCategory::ObeseClassI,
    label: "Obesity Class I",
    range: "30.0 - 34.9",
    color: "#ef4444",
    description: "You are in the obesity range. Consider consulting with a healthcare provider.",
    risks: &[
        "High risk of heart disease",
        "Type 2 diabetes",
        "High blood pressure",
        "Stroke risk",
        "Sleep apnea",
    ],
    recommendations: &[
        "Consult with healthcare provider",
        "Create a structured weight loss plan",
        "Consider professional nutrition counseling",
        "Increase physical activity gradually",
    ],
};

static OBESE_CLASS_II: BmiCategoryInfo = BmiCategoryInfo {
    category: BmiCategory::ObeseClassII,
    label: "Obesity Class II",
    range: "35.0 - 39.9",
    color: "#dc2626",
    description: "You are in the severe obesity range. Medical consultation is recommended.",
    risks: &[
        "Very high risk of heart disease",
        "Type 2 diabetes",
        "High blood pressure",
        "Stroke",
        "Sleep apnea",
        "Certain cancers",
    ],
    recommendations: &[
        "Immediate medical consultation recommended",
        "Consider medically supervised weight loss",
        "Comprehensive lifestyle intervention",
        "Regular health monitoring",
    ],
};

static OBESE_CLASS_III: BmiCategoryInfo = BmiCategoryInfo {
    category: BmiCategory::ObeseClassIII,
    label: "Obesity Class III",
    range: "40.0 and above",
    color: "#991b1b",
    description:
        "You are in the extreme obesity range. Immediate medical attention is recommended.",
    risks: &[
        "Extremely high risk of heart disease",
        "Type 2 diabetes",
        "High blood pressure",
        "Stroke",
        "Sleep apnea",
        "Certain cancers",
        "Reduced life expectancy",
    ],
    recommendations: &[
        "Immediate medical consultation required",
        "Consider bariatric surgery evaluation",
        "Comprehensive medical weight management",
        "Regular specialist monitoring",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_matching_record() {
        for category in BmiCategory::ALL {
            let record = info(category);
            assert_eq!(record.category, category);
            assert!(!record.recommendations.is_empty(), "{category:?}");
            assert!(record.color.starts_with('#'));
        }
    }

    #[test]
    fn test_only_normal_is_risk_free() {
        let risk_free: Vec<BmiCategory> = all()
            .filter(|record| record.risks.is_empty())
            .map(|record| record.category)
            .collect();
        assert_eq!(risk_free, vec![BmiCategory::Normal]);
    }

    #[test]
    fn test_all_is_ordered() {
        let labels: Vec<&str> = all().map(|record| record.label).collect();
        assert_eq!(labels.first(), Some(&"Underweight"));
        assert_eq!(labels.last(), Some(&"Obesity Class III"));
        assert_eq!(labels.len(), 6);
    }

    #[test]
    fn test_serializes_category_key() {
        let json = serde_json::to_value(info(BmiCategory::ObeseClassI)).unwrap();
        assert_eq!(json["category"], "obese_class_1");
        assert_eq!(json["range"], "30.0 - 34.9");
    }
}
