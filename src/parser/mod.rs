pub mod rules;

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{BudgetPreference, MacroPreferences, PreferenceProfile};
use rules::{
    matches_any, MacroFlag, ALLERGEN_RULES, BUDGET_RULES, DEFAULT_CALORIE_TARGET,
    DEFAULT_PREP_TIME_LIMIT, DIET_RULES, MACRO_RULES, PREP_RULES,
};

static KCAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*kcal").unwrap());

// Distributes a shared modifier over a conjunction, so "higher protein &
// fiber" reads as "higher protein & higher fiber" before table matching.
static COORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(high|higher|low|lower)\s+(protein|fiber|carb|fat)s?\s*(?:&|and)\s+(protein|fiber|carb|fat)")
        .unwrap()
});

/// Parse a free-text dietary profile into a structured preference record.
///
/// Pure function over a fixed vocabulary of case-insensitive substring
/// rules (see [`rules`]). Parsing never fails: any absent or unparseable
/// signal falls back to its stated default, so ambiguous text degrades
/// gracefully instead of raising an error.
pub fn parse(profile_text: &str) -> PreferenceProfile {
    let text = profile_text.to_lowercase();
    let text = COORD_RE.replace_all(&text, "$1 $2 & $1 $3").into_owned();

    let calorie_target = KCAL_RE
        .captures(&text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(DEFAULT_CALORIE_TARGET);

    let exclude_allergens = ALLERGEN_RULES
        .iter()
        .filter(|(patterns, _)| matches_any(&text, patterns))
        .map(|(_, tag)| tag.to_string())
        .collect();

    let dietary_preferences = DIET_RULES
        .iter()
        .filter(|(patterns, _)| matches_any(&text, patterns))
        .map(|(_, tag)| *tag)
        .collect();

    let mut macro_preferences = MacroPreferences::default();
    for (patterns, flag) in MACRO_RULES {
        if matches_any(&text, patterns) {
            match flag {
                MacroFlag::HighProtein => macro_preferences.high_protein = true,
                MacroFlag::HighFiber => macro_preferences.high_fiber = true,
                MacroFlag::LowCarb => macro_preferences.low_carb = true,
                MacroFlag::LowFat => macro_preferences.low_fat = true,
            }
        }
    }

    // Last matching rule wins for budget and prep time.
    let budget_preference = BUDGET_RULES
        .iter()
        .filter(|(patterns, _)| matches_any(&text, patterns))
        .map(|(_, budget)| *budget)
        .next_back()
        .unwrap_or(BudgetPreference::Medium);

    let prep_time_limit = PREP_RULES
        .iter()
        .filter(|(patterns, _)| matches_any(&text, patterns))
        .map(|(_, limit)| *limit)
        .next_back()
        .unwrap_or(DEFAULT_PREP_TIME_LIMIT);

    PreferenceProfile {
        calorie_target,
        exclude_allergens,
        dietary_preferences,
        macro_preferences,
        budget_preference,
        prep_time_limit,
    }
}
