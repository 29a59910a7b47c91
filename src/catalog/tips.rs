//! The health-tips library and its category filter.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    #[display(fmt = "Nutrition")]
    Nutrition,
    #[display(fmt = "Exercise")]
    Exercise,
    #[display(fmt = "Mental Health")]
    MentalHealth,
    #[display(fmt = "Sleep")]
    Sleep,
    #[display(fmt = "Hydration")]
    Hydration,
    #[display(fmt = "General Health")]
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TipCategoryInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl TipCategory {
    /// In the order the library view lists them.
    pub const ALL: [Self; 6] = [
        Self::Nutrition,
        Self::Exercise,
        Self::MentalHealth,
        Self::Sleep,
        Self::Hydration,
        Self::General,
    ];

    pub const fn info(self) -> TipCategoryInfo {
        let (name, icon, description) = match self {
            Self::Nutrition => ("Nutrition", "🥗", "Tips for healthy eating and nutrition"),
            Self::Exercise => ("Exercise", "🏃‍♂️", "Physical activity and fitness guidance"),
            Self::MentalHealth => (
                "Mental Health",
                "🧘‍♀️",
                "Mental wellness and stress management",
            ),
            Self::Sleep => ("Sleep", "😴", "Better sleep habits and quality rest"),
            Self::Hydration => ("Hydration", "💧", "Proper hydration and fluid intake"),
            Self::General => ("General Health", "🩺", "Overall health and wellness tips"),
        };
        TipCategoryInfo {
            name,
            icon,
            description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HealthTip {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: TipCategory,
    pub icon: &'static str,
    pub content: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

impl HealthTip {
    /// Case-insensitive substring match over title, description and content.
    /// Benefits are not searched.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        let hit = |text: &str| text.to_lowercase().contains(&needle);
        hit(self.title) || hit(self.description) || self.content.iter().any(|line| hit(line))
    }
}

pub fn all() -> &'static [HealthTip] {
    &TIPS
}

pub fn by_category(category: TipCategory) -> Vec<&'static HealthTip> {
    TIPS.iter().filter(|tip| tip.category == category).collect()
}

pub fn search(query: &str) -> Vec<&'static HealthTip> {
    TIPS.iter().filter(|tip| tip.matches(query)).collect()
}

/// The library view's selection state.
///
/// A query containing anything besides whitespace searches the whole
/// library and ignores `category`. Otherwise the selected category is
/// listed, or every tip when none is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipFilter {
    pub category: Option<TipCategory>,
    pub query: String,
}

impl TipFilter {
    pub fn apply(&self) -> Vec<&'static HealthTip> {
        if !self.query.trim().is_empty() {
            return search(&self.query);
        }
        match self.category {
            Some(category) => by_category(category),
            None => TIPS.iter().collect(),
        }
    }
}

static TIPS: [HealthTip; 11] = [
    HealthTip {
        id: "nutrition-1",
        title: "Eat a Rainbow of Vegetables",
        description: "Include colorful vegetables in your daily diet for optimal nutrition",
        category: TipCategory::Nutrition,
        icon: "🥗",
        content: &[
            "Aim for at least 5 servings of fruits and vegetables daily",
            "Different colors provide different nutrients and antioxidants",
            "Include leafy greens, orange vegetables, and purple produce",
            "Fresh, frozen, and canned (without added sugar/salt) all count",
        ],
        benefits: &[
            "Reduced risk of chronic diseases",
            "Better immune system function",
            "Improved digestion and gut health",
            "Natural source of vitamins and minerals",
        ],
    },
    HealthTip {
        id: "nutrition-2",
        title: "Stay Hydrated",
        description: "Proper hydration is essential for optimal body function",
        category: TipCategory::Hydration,
        icon: "💧",
        content: &[
            "Drink at least 8 glasses (64 oz) of water daily",
            "Increase intake during exercise or hot weather",
            "Monitor urine color - pale yellow indicates good hydration",
            "Include water-rich foods like cucumbers and watermelon",
        ],
        benefits: &[
            "Better energy levels and mental clarity",
            "Improved skin health",
            "Better kidney function",
            "Helps maintain healthy weight",
        ],
    },
    HealthTip {
        id: "nutrition-3",
        title: "Choose Whole Grains",
        description: "Replace refined grains with nutrient-rich whole grains",
        category: TipCategory::Nutrition,
        icon: "🌾",
        content: &[
            "Choose brown rice over white rice",
            "Opt for whole wheat bread and pasta",
            "Try quinoa, oats, and barley",
            "Read labels - look for \"whole grain\" as first ingredient",
        ],
        benefits: &[
            "Better blood sugar control",
            "Increased fiber intake",
            "Longer-lasting energy",
            "Reduced risk of heart disease",
        ],
    },
    HealthTip {
        id: "exercise-1",
        title: "Get Moving Daily",
        description: "Aim for at least 30 minutes of physical activity every day",
        category: TipCategory::Exercise,
        icon: "🏃‍♂️",
        content: &[
            "Start with 10-minute walks if you're a beginner",
            "Take stairs instead of elevators",
            "Park farther away to add extra steps",
            "Try dancing, gardening, or playing with pets",
        ],
        benefits: &[
            "Improved cardiovascular health",
            "Better mood and mental health",
            "Stronger bones and muscles",
            "Better sleep quality",
        ],
    },
    HealthTip {
        id: "exercise-2",
        title: "Strength Training",
        description: "Include resistance exercises 2-3 times per week",
        category: TipCategory::Exercise,
        icon: "💪",
        content: &[
            "Use bodyweight exercises like push-ups and squats",
            "Try resistance bands or free weights",
            "Focus on major muscle groups",
            "Allow rest days between strength sessions",
        ],
        benefits: &[
            "Increased muscle mass and bone density",
            "Better metabolism",
            "Improved functional strength",
            "Reduced risk of injury",
        ],
    },
    HealthTip {
        id: "sleep-1",
        title: "Prioritize Quality Sleep",
        description: "Aim for 7-9 hours of quality sleep each night",
        category: TipCategory::Sleep,
        icon: "😴",
        content: &[
            "Maintain a consistent sleep schedule",
            "Create a relaxing bedtime routine",
            "Keep bedroom cool, dark, and quiet",
            "Avoid screens 1 hour before bedtime",
        ],
        benefits: &[
            "Better immune system function",
            "Improved memory and concentration",
            "Better emotional regulation",
            "Reduced risk of chronic diseases",
        ],
    },
    HealthTip {
        id: "sleep-2",
        title: "Create a Sleep-Friendly Environment",
        description: "Optimize your bedroom for better sleep quality",
        category: TipCategory::Sleep,
        icon: "🛏️",
        content: &[
            "Invest in a comfortable mattress and pillows",
            "Use blackout curtains or eye masks",
            "Keep temperature between 60-67°F (15-19°C)",
            "Remove electronic devices from bedroom",
        ],
        benefits: &[
            "Faster sleep onset",
            "Deeper, more restorative sleep",
            "Fewer sleep disruptions",
            "Better morning alertness",
        ],
    },
    HealthTip {
        id: "mental-1",
        title: "Practice Mindfulness",
        description: "Incorporate mindfulness and meditation into your daily routine",
        category: TipCategory::MentalHealth,
        icon: "🧘‍♀️",
        content: &[
            "Start with 5-10 minutes of daily meditation",
            "Practice deep breathing exercises",
            "Try mindful eating and walking",
            "Use meditation apps for guidance",
        ],
        benefits: &[
            "Reduced stress and anxiety",
            "Better emotional regulation",
            "Improved focus and concentration",
            "Enhanced self-awareness",
        ],
    },
    HealthTip {
        id: "mental-2",
        title: "Stay Connected",
        description: "Maintain strong social connections for mental well-being",
        category: TipCategory::MentalHealth,
        icon: "👥",
        content: &[
            "Schedule regular time with friends and family",
            "Join clubs or groups with shared interests",
            "Volunteer in your community",
            "Reach out when you need support",
        ],
        benefits: &[
            "Reduced feelings of loneliness",
            "Better stress management",
            "Increased sense of purpose",
            "Improved overall life satisfaction",
        ],
    },
    HealthTip {
        id: "general-1",
        title: "Regular Health Check-ups",
        description: "Stay on top of preventive healthcare",
        category: TipCategory::General,
        icon: "🩺",
        content: &[
            "Schedule annual physical exams",
            "Keep up with recommended screenings",
            "Monitor blood pressure and cholesterol",
            "Stay current with vaccinations",
        ],
        benefits: &[
            "Early detection of health issues",
            "Better management of chronic conditions",
            "Peace of mind",
            "Longer, healthier life",
        ],
    },
    HealthTip {
        id: "general-2",
        title: "Limit Processed Foods",
        description: "Reduce consumption of highly processed and packaged foods",
        category: TipCategory::Nutrition,
        icon: "🚫",
        content: &[
            "Cook more meals at home",
            "Read nutrition labels carefully",
            "Choose fresh ingredients when possible",
            "Limit foods high in added sugars and sodium",
        ],
        benefits: &[
            "Better nutrient intake",
            "Improved weight management",
            "Reduced risk of chronic diseases",
            "Better energy levels",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tips: &[&HealthTip]) -> Vec<&'static str> {
        tips.iter().map(|tip| tip.id).collect()
    }

    #[test]
    fn test_by_category() {
        assert_eq!(
            ids(&by_category(TipCategory::Nutrition)),
            vec!["nutrition-1", "nutrition-3", "general-2"]
        );
        assert_eq!(ids(&by_category(TipCategory::Hydration)), vec!["nutrition-2"]);
        assert_eq!(ids(&by_category(TipCategory::General)), vec!["general-1"]);
    }

    #[test]
    fn test_categories_partition_library() {
        let total: usize = TipCategory::ALL
            .into_iter()
            .map(|category| by_category(category).len())
            .sum();
        assert_eq!(total, all().len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(ids(&search("SLEEP")), vec!["sleep-1", "sleep-2"]);
        assert_eq!(search("sleep"), search("Sleep"));
    }

    #[test]
    fn test_search_reads_content_but_not_benefits() {
        assert_eq!(ids(&search("water")), vec!["nutrition-2"]);
        // "Better sleep quality" only appears among exercise-1's benefits
        assert!(!ids(&search("sleep")).contains(&"exercise-1"));
    }

    #[test]
    fn test_search_without_hits() {
        assert!(search("astrophysics").is_empty());
    }

    #[test]
    fn test_filter_query_overrides_category() {
        let filter = TipFilter {
            category: Some(TipCategory::Exercise),
            query: "water".to_string(),
        };
        assert_eq!(ids(&filter.apply()), vec!["nutrition-2"]);
    }

    #[test]
    fn test_filter_blank_query_uses_category() {
        let filter = TipFilter {
            category: Some(TipCategory::Sleep),
            query: "   ".to_string(),
        };
        assert_eq!(ids(&filter.apply()), vec!["sleep-1", "sleep-2"]);
        assert_eq!(TipFilter::default().apply().len(), 11);
    }

    #[test]
    fn test_filter_from_partial_json() {
        let filter: TipFilter = serde_json::from_str(r#"{"category":"mental_health"}"#).unwrap();
        assert_eq!(filter.category, Some(TipCategory::MentalHealth));
        assert_eq!(ids(&filter.apply()), vec!["mental-1", "mental-2"]);
    }

    #[test]
    fn test_category_info() {
        let info = TipCategory::General.info();
        assert_eq!(info.name, "General Health");
        assert_eq!(info.icon, "🩺");
        for category in TipCategory::ALL {
            assert_eq!(category.info().name, category.to_string());
        }
    }
}
