//! Diet plans keyed by BMI band.
//!
//! There are plans for the underweight, normal and overweight bands. Every
//! obesity class shares one structured weight-loss plan built on the
//! overweight meals with a lower calorie target.

use serde::Serialize;

use crate::bmi::BmiCategory;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[display(fmt = "breakfast")]
    Breakfast,
    #[display(fmt = "lunch")]
    Lunch,
    #[display(fmt = "dinner")]
    Dinner,
    #[display(fmt = "snack")]
    Snack,
}

/// Grams per meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct NutritionInfo {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    pub sugar: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: &'static str,
    pub calories: u32,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
    pub nutrition: NutritionInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DietPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub bmi_category: BmiCategory,
    pub target_calories: u32,
    pub meals: &'static [Meal],
    pub guidelines: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<&'static [&'static str]>,
}

/// Calories and macros summed over a day's meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Add)]
pub struct DailyNutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    pub sugar: u32,
}

impl From<&Meal> for DailyNutrition {
    fn from(meal: &Meal) -> Self {
        let n = meal.nutrition;
        Self {
            calories: meal.calories,
            protein: n.protein,
            carbs: n.carbs,
            fat: n.fat,
            fiber: n.fiber,
            sugar: n.sugar,
        }
    }
}

impl DietPlan {
    pub fn daily_nutrition(&self) -> DailyNutrition {
        self.meals
            .iter()
            .map(DailyNutrition::from)
            .fold(DailyNutrition::default(), |total, meal| total + meal)
    }

    pub fn meals_of(&self, meal_type: MealType) -> Vec<&'static Meal> {
        self.meals
            .iter()
            .filter(|meal| meal.meal_type == meal_type)
            .collect()
    }
}

/// The plan recommended for `category`.
pub fn diet_plan_for(category: BmiCategory) -> &'static DietPlan {
    match category {
        BmiCategory::Underweight => &WEIGHT_GAIN,
        BmiCategory::Normal => &MAINTENANCE,
        BmiCategory::Overweight => &WEIGHT_LOSS,
        BmiCategory::ObeseClassI | BmiCategory::ObeseClassII | BmiCategory::ObeseClassIII => {
            &STRUCTURED_WEIGHT_LOSS
        }
    }
}

/// Every distinct plan.
pub fn all() -> [&'static DietPlan; 4] {
    [
        &WEIGHT_GAIN,
        &MAINTENANCE,
        &WEIGHT_LOSS,
        &STRUCTURED_WEIGHT_LOSS,
    ]
}

static WEIGHT_GAIN: DietPlan = DietPlan {
    id: "underweight-plan",
    name: "Weight Gain Diet Plan",
    bmi_category: BmiCategory::Underweight,
    target_calories: 2800,
    guidelines: &[
        "Eat frequent, smaller meals (5-6 times per day)",
        "Include healthy fats and proteins in every meal",
        "Choose nutrient-dense, calorie-rich foods",
        "Stay hydrated but avoid drinking too much before meals",
        "Consider strength training to build muscle mass",
    ],
    restrictions: Some(&[
        "Avoid empty calories from junk food",
        "Limit excessive cardio exercise",
        "Don't skip meals",
    ]),
    meals: &[
        Meal {
            meal_type: MealType::Breakfast,
            name: "Protein-Rich Breakfast Bowl",
            calories: 650,
            ingredients: &[
                "1 cup oatmeal with whole milk",
                "1 sliced banana",
                "2 tbsp almond butter",
                "1 tbsp honey",
                "1/4 cup mixed nuts",
            ],
            instructions: &[
                "Cook oatmeal with whole milk",
                "Top with sliced banana and almond butter",
                "Drizzle with honey and sprinkle nuts",
            ],
            nutrition: NutritionInfo {
                protein: 25,
                carbs: 75,
                fat: 28,
                fiber: 12,
                sugar: 35,
            },
        },
        Meal {
            meal_type: MealType::Lunch,
            name: "Quinoa Power Bowl",
            calories: 750,
            ingredients: &[
                "1 cup cooked quinoa",
                "4 oz grilled chicken breast",
                "1/2 avocado",
                "1/4 cup chickpeas",
                "2 tbsp olive oil dressing",
                "Mixed vegetables",
            ],
            instructions: &[
                "Cook quinoa according to package directions",
                "Grill chicken breast and slice",
                "Combine all ingredients in a bowl",
                "Drizzle with olive oil dressing",
            ],
            nutrition: NutritionInfo {
                protein: 45,
                carbs: 65,
                fat: 25,
                fiber: 15,
                sugar: 8,
            },
        },
        Meal {
            meal_type: MealType::Dinner,
            name: "Salmon with Sweet Potato",
            calories: 800,
            ingredients: &[
                "6 oz baked salmon",
                "1 large roasted sweet potato",
                "1 cup steamed broccoli",
                "2 tbsp butter",
                "Herbs and spices",
            ],
            instructions: &[
                "Bake salmon at 400°F for 15-20 minutes",
                "Roast sweet potato until tender",
                "Steam broccoli until bright green",
                "Serve with butter and seasonings",
            ],
            nutrition: NutritionInfo {
                protein: 50,
                carbs: 45,
                fat: 35,
                fiber: 10,
                sugar: 15,
            },
        },
        Meal {
            meal_type: MealType::Snack,
            name: "Trail Mix & Greek Yogurt",
            calories: 600,
            ingredients: &[
                "1 cup Greek yogurt",
                "1/4 cup trail mix",
                "1 tbsp honey",
                "1 medium apple",
            ],
            instructions: &[
                "Mix honey into Greek yogurt",
                "Top with trail mix",
                "Serve with sliced apple",
            ],
            nutrition: NutritionInfo {
                protein: 25,
                carbs: 45,
                fat: 20,
                fiber: 8,
                sugar: 40,
            },
        },
    ],
};

static MAINTENANCE: DietPlan = DietPlan {
    id: "normal-plan",
    name: "Balanced Maintenance Diet",
    bmi_category: BmiCategory::Normal,
    target_calories: 2200,
    guidelines: &[
        "Maintain current healthy eating patterns",
        "Include variety in your diet",
        "Stay active with regular exercise",
        "Practice portion control",
        "Stay hydrated throughout the day",
    ],
    restrictions: None,
    meals: &[
        Meal {
            meal_type: MealType::Breakfast,
            name: "Balanced Morning Meal",
            calories: 450,
            ingredients: &[
                "2 whole grain toast slices",
                "2 scrambled eggs",
                "1/2 avocado",
                "1 cup mixed berries",
                "1 cup green tea",
            ],
            instructions: &[
                "Toast whole grain bread",
                "Scramble eggs with minimal oil",
                "Mash avocado and spread on toast",
                "Serve with fresh berries",
            ],
            nutrition: NutritionInfo {
                protein: 20,
                carbs: 45,
                fat: 18,
                fiber: 12,
                sugar: 15,
            },
        },
        Meal {
            meal_type: MealType::Lunch,
            name: "Mediterranean Salad",
            calories: 550,
            ingredients: &[
                "2 cups mixed greens",
                "3 oz grilled chicken",
                "1/4 cup feta cheese",
                "10 olives",
                "1 tbsp olive oil",
                "1 small whole grain pita",
            ],
            instructions: &[
                "Grill chicken and slice",
                "Combine greens, chicken, feta, and olives",
                "Drizzle with olive oil",
                "Serve with pita bread",
            ],
            nutrition: NutritionInfo {
                protein: 35,
                carbs: 30,
                fat: 22,
                fiber: 8,
                sugar: 6,
            },
        },
        Meal {
            meal_type: MealType::Dinner,
            name: "Lean Protein with Vegetables",
            calories: 600,
            ingredients: &[
                "4 oz lean beef or fish",
                "1 cup brown rice",
                "2 cups roasted vegetables",
                "1 tbsp olive oil",
                "Herbs and spices",
            ],
            instructions: &[
                "Cook protein of choice",
                "Prepare brown rice",
                "Roast vegetables with olive oil",
                "Season with herbs and spices",
            ],
            nutrition: NutritionInfo {
                protein: 40,
                carbs: 50,
                fat: 15,
                fiber: 10,
                sugar: 12,
            },
        },
        Meal {
            meal_type: MealType::Snack,
            name: "Healthy Snack Mix",
            calories: 300,
            ingredients: &["1 medium apple", "2 tbsp almond butter", "1 cup herbal tea"],
            instructions: &[
                "Slice apple",
                "Serve with almond butter for dipping",
                "Enjoy with herbal tea",
            ],
            nutrition: NutritionInfo {
                protein: 8,
                carbs: 25,
                fat: 16,
                fiber: 6,
                sugar: 20,
            },
        },
    ],
};

const WEIGHT_LOSS_RESTRICTIONS: &[&str] = &[
    "Limit processed and packaged foods",
    "Reduce added sugars and refined carbs",
    "Control portion sizes",
    "Limit alcohol consumption",
];

const WEIGHT_LOSS_MEALS: &[Meal] = &[
    Meal {
        meal_type: MealType::Breakfast,
        name: "High-Protein Breakfast",
        calories: 350,
        ingredients: &[
            "3 egg whites + 1 whole egg",
            "1 cup spinach",
            "1/4 cup low-fat cheese",
            "1 slice whole grain toast",
            "1/2 grapefruit",
        ],
        instructions: &[
            "Sauté spinach until wilted",
            "Scramble eggs with spinach and cheese",
            "Serve with toast and grapefruit",
        ],
        nutrition: NutritionInfo {
            protein: 25,
            carbs: 30,
            fat: 12,
            fiber: 8,
            sugar: 15,
        },
    },
    Meal {
        meal_type: MealType::Lunch,
        name: "Lean Protein Salad",
        calories: 450,
        ingredients: &[
            "4 oz grilled chicken breast",
            "3 cups mixed greens",
            "1 cup cherry tomatoes",
            "1/2 cucumber",
            "2 tbsp balsamic vinaigrette",
        ],
        instructions: &[
            "Grill chicken breast",
            "Combine all vegetables",
            "Top with sliced chicken",
            "Drizzle with vinaigrette",
        ],
        nutrition: NutritionInfo {
            protein: 35,
            carbs: 20,
            fat: 15,
            fiber: 8,
            sugar: 12,
        },
    },
    Meal {
        meal_type: MealType::Dinner,
        name: "Fish with Vegetables",
        calories: 500,
        ingredients: &[
            "5 oz baked white fish",
            "2 cups steamed broccoli",
            "1/2 cup quinoa",
            "1 tbsp olive oil",
            "Lemon and herbs",
        ],
        instructions: &[
            "Bake fish with lemon and herbs",
            "Steam broccoli until tender",
            "Cook quinoa according to package",
            "Drizzle vegetables with olive oil",
        ],
        nutrition: NutritionInfo {
            protein: 40,
            carbs: 35,
            fat: 12,
            fiber: 12,
            sugar: 8,
        },
    },
    Meal {
        meal_type: MealType::Snack,
        name: "Light Healthy Snack",
        calories: 200,
        ingredients: &["1 cup raw vegetables", "2 tbsp hummus", "1 small orange"],
        instructions: &[
            "Cut vegetables into sticks",
            "Serve with hummus for dipping",
            "Enjoy with fresh orange",
        ],
        nutrition: NutritionInfo {
            protein: 6,
            carbs: 25,
            fat: 6,
            fiber: 8,
            sugar: 18,
        },
    },
];

static WEIGHT_LOSS: DietPlan = DietPlan {
    id: "overweight-plan",
    name: "Weight Loss Diet Plan",
    bmi_category: BmiCategory::Overweight,
    target_calories: 1800,
    guidelines: &[
        "Create a moderate calorie deficit",
        "Focus on whole, unprocessed foods",
        "Increase protein intake to preserve muscle",
        "Include plenty of vegetables and fiber",
        "Stay hydrated and limit sugary drinks",
    ],
    restrictions: Some(WEIGHT_LOSS_RESTRICTIONS),
    meals: WEIGHT_LOSS_MEALS,
};

// Overweight meals with a lower target and two extra guidelines
static STRUCTURED_WEIGHT_LOSS: DietPlan = DietPlan {
    id: "structured-plan",
    name: "Structured Weight Loss Plan",
    bmi_category: BmiCategory::Overweight,
    target_calories: 1600,
    guidelines: &[
        "Create a moderate calorie deficit",
        "Focus on whole, unprocessed foods",
        "Increase protein intake to preserve muscle",
        "Include plenty of vegetables and fiber",
        "Stay hydrated and limit sugary drinks",
        "Consider consulting with a nutritionist",
        "Monitor progress with healthcare provider",
    ],
    restrictions: Some(WEIGHT_LOSS_RESTRICTIONS),
    meals: WEIGHT_LOSS_MEALS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_per_band() {
        assert_eq!(diet_plan_for(BmiCategory::Underweight).target_calories, 2800);
        assert_eq!(diet_plan_for(BmiCategory::Normal).target_calories, 2200);
        assert_eq!(diet_plan_for(BmiCategory::Overweight).target_calories, 1800);
    }

    #[test]
    fn test_obesity_classes_share_structured_plan() {
        let base = diet_plan_for(BmiCategory::Overweight);
        for category in [
            BmiCategory::ObeseClassI,
            BmiCategory::ObeseClassII,
            BmiCategory::ObeseClassIII,
        ] {
            let plan = diet_plan_for(category);
            assert_eq!(plan.name, "Structured Weight Loss Plan");
            assert_eq!(plan.target_calories, 1600);
            assert_eq!(plan.meals, base.meals);
            assert_eq!(plan.restrictions, base.restrictions);
            assert_eq!(&plan.guidelines[..base.guidelines.len()], base.guidelines);
            assert_eq!(plan.guidelines.len(), base.guidelines.len() + 2);
        }
    }

    #[test]
    fn test_plan_ids_are_distinct() {
        let mut ids: Vec<&str> = all().iter().map(|plan| plan.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
        assert_eq!(diet_plan_for(BmiCategory::ObeseClassII).id, "structured-plan");
    }

    #[test]
    fn test_daily_nutrition_sums_meals() {
        let totals = diet_plan_for(BmiCategory::Underweight).daily_nutrition();
        assert_eq!(
            totals,
            DailyNutrition {
                calories: 2800,
                protein: 145,
                carbs: 230,
                fat: 108,
                fiber: 45,
                sugar: 98,
            }
        );

        let totals = diet_plan_for(BmiCategory::Normal).daily_nutrition();
        assert_eq!(totals.calories, 1900);
        assert_eq!(totals.protein, 103);
    }

    #[test]
    fn test_meals_of_type() {
        let plan = diet_plan_for(BmiCategory::Overweight);
        let dinners = plan.meals_of(MealType::Dinner);
        assert_eq!(dinners.len(), 1);
        assert_eq!(dinners[0].name, "Fish with Vegetables");
    }

    #[test]
    fn test_every_plan_covers_each_meal_type() {
        for plan in all() {
            for meal_type in [
                MealType::Breakfast,
                MealType::Lunch,
                MealType::Dinner,
                MealType::Snack,
            ] {
                assert_eq!(plan.meals_of(meal_type).len(), 1, "{} {meal_type}", plan.id);
            }
        }
    }

    #[test]
    fn test_serialize_skips_missing_restrictions() {
        let json = serde_json::to_value(diet_plan_for(BmiCategory::Normal)).unwrap();
        assert!(json.get("restrictions").is_none());
        assert_eq!(json["meals"][0]["type"], "breakfast");

        let json = serde_json::to_value(diet_plan_for(BmiCategory::Overweight)).unwrap();
        assert_eq!(json["restrictions"].as_array().map(Vec::len), Some(4));
    }
}
