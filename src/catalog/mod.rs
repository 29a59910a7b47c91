//! Read-only reference data: BMI category descriptions, diet plans and the
//! health-tips library. Everything here is `static` and never mutated.

pub mod categories;
pub mod diet;
pub mod tips;

pub use categories::BmiCategoryInfo;
pub use diet::{diet_plan_for, DailyNutrition, DietPlan, Meal, MealType, NutritionInfo};
pub use tips::{HealthTip, TipCategory, TipCategoryInfo, TipFilter};
