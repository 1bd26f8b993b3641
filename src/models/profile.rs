use serde::{Deserialize, Serialize};

/// Budget preference, ordered low < medium < high.
///
/// Each level caps the acceptable food price tier; tier-4 catalog items are
/// out of reach even at `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPreference {
    Low,
    Medium,
    High,
}

impl BudgetPreference {
    /// Maximum acceptable price tier for this budget level.
    pub fn max_price_tier(self) -> u8 {
        match self {
            BudgetPreference::Low => 1,
            BudgetPreference::Medium => 2,
            BudgetPreference::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetPreference::Low => "low",
            BudgetPreference::Medium => "medium",
            BudgetPreference::High => "high",
        }
    }
}

/// Dietary preference tag parsed from profile text.
///
/// Tags are independently additive: `Vegan` does not imply `Vegetarian`,
/// and `Keto`/`Paleo` carry no filtering rules of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietTag {
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
}

impl DietTag {
    pub fn label(self) -> &'static str {
        match self {
            DietTag::Vegetarian => "vegetarian",
            DietTag::Vegan => "vegan",
            DietTag::Keto => "keto",
            DietTag::Paleo => "paleo",
        }
    }
}

/// Macro nudges for the scoring function. All default to false ("no
/// preference").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPreferences {
    pub high_protein: bool,
    pub high_fiber: bool,
    pub low_carb: bool,
    pub low_fat: bool,
}

/// Structured preference record produced by the profile parser.
///
/// Never mutated in place: the substitution engine builds a modified clone
/// and replans from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    pub calorie_target: u32,
    pub exclude_allergens: Vec<String>,
    pub dietary_preferences: Vec<DietTag>,
    pub macro_preferences: MacroPreferences,
    pub budget_preference: BudgetPreference,
    pub prep_time_limit: u32,
}

impl PreferenceProfile {
    pub fn has_diet(&self, tag: DietTag) -> bool {
        self.dietary_preferences.contains(&tag)
    }
}
