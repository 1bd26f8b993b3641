use crate::models::{BudgetPreference, DietTag};

/// Macro flag toggled by a matched pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroFlag {
    HighProtein,
    HighFiber,
    LowCarb,
    LowFat,
}

/// Calorie target used when no "N kcal" token is present or parseable.
pub const DEFAULT_CALORIE_TARGET: u32 = 1600;

/// Prep time ceiling (minutes) used when no prep-speed token is present.
pub const DEFAULT_PREP_TIME_LIMIT: u32 = 30;

/// Allergen synonym table: any matching pattern adds the canonical tag.
///
/// Table order is the insertion order of the output set. Each source token
/// maps to exactly one tag, so duplicates are impossible.
pub const ALLERGEN_RULES: &[(&[&str], &str)] = &[
    (&["peanut", "peanuts"], "peanuts"),
    (&["tree nut", "tree_nuts"], "tree_nuts"),
    (&["dairy", "milk"], "dairy"),
    (&["gluten", "wheat"], "wheat"),
    (&["soy"], "soy"),
    (&["egg", "eggs"], "eggs"),
    (&["fish", "seafood"], "fish"),
];

/// Dietary preference table. Tags are independently additive; no rule links
/// vegan to vegetarian.
pub const DIET_RULES: &[(&[&str], DietTag)] = &[
    (&["vegetarian", "veggie"], DietTag::Vegetarian),
    (&["vegan"], DietTag::Vegan),
    (&["keto"], DietTag::Keto),
    (&["paleo"], DietTag::Paleo),
];

/// Macro preference table. Each flag defaults to false.
pub const MACRO_RULES: &[(&[&str], MacroFlag)] = &[
    (&["high protein", "higher protein"], MacroFlag::HighProtein),
    (&["high fiber", "higher fiber"], MacroFlag::HighFiber),
    (&["low carb", "lower carb"], MacroFlag::LowCarb),
    (&["low fat", "lower fat"], MacroFlag::LowFat),
];

/// Budget table, evaluated in order with last-match-wins: text containing
/// both "cheap" and "premium" resolves to high.
pub const BUDGET_RULES: &[(&[&str], BudgetPreference)] = &[
    (&["budget", "cheap"], BudgetPreference::Low),
    (&["premium", "expensive"], BudgetPreference::High),
];

/// Prep time table, same last-match-wins ordering: "elaborate" overrides
/// "quick" when both appear.
pub const PREP_RULES: &[(&[&str], u32)] = &[
    (&["quick", "fast"], 15),
    (&["elaborate", "complex"], 60),
];

/// Whether lowercased text contains any of the given patterns.
pub fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}
