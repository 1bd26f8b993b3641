use crate::models::{DietTag, Food, PreferenceProfile};
use crate::planner::constants::{VEGAN_EXCLUDED_NAMES, VEGETARIAN_EXCLUDED_NAMES};

/// Whether none of the profile's excluded allergens appear in the food's
/// allergen text.
pub fn passes_allergens(food: &Food, profile: &PreferenceProfile) -> bool {
    !profile
        .exclude_allergens
        .iter()
        .any(|tag| food.has_allergen(tag))
}

/// Whether the food's name clears the profile's dietary tag rules.
pub fn passes_dietary(food: &Food, profile: &PreferenceProfile) -> bool {
    if profile.has_diet(DietTag::Vegetarian)
        && VEGETARIAN_EXCLUDED_NAMES.iter().any(|n| food.name_contains(n))
    {
        return false;
    }

    if profile.has_diet(DietTag::Vegan)
        && VEGAN_EXCLUDED_NAMES.iter().any(|n| food.name_contains(n))
    {
        return false;
    }

    true
}

/// Whether the food can be prepared within the profile's time ceiling
/// (inclusive).
pub fn within_prep_limit(food: &Food, profile: &PreferenceProfile) -> bool {
    food.prep_time_min <= profile.prep_time_limit
}

/// Whether the food's price tier is reachable at the profile's budget level.
pub fn within_budget(food: &Food, profile: &PreferenceProfile) -> bool {
    food.price_tier <= profile.budget_preference.max_price_tier()
}

/// Filter the catalog down to foods that satisfy every profile constraint.
///
/// Filtering never fails; a short or empty result is the assembler's
/// problem to surface.
pub fn filter_catalog<'a>(catalog: &'a [Food], profile: &PreferenceProfile) -> Vec<&'a Food> {
    catalog
        .iter()
        .filter(|food| {
            passes_allergens(food, profile)
                && passes_dietary(food, profile)
                && within_prep_limit(food, profile)
                && within_budget(food, profile)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPreference, MacroPreferences};

    fn food(name: &str, allergens: &str, price_tier: u8, prep: u32) -> Food {
        Food {
            name: name.to_string(),
            calories: 300,
            allergens: allergens.to_string(),
            protein_g: 10.0,
            fiber_g: 3.0,
            carbs_g: 20.0,
            fat_g: 5.0,
            cuisine: "test".to_string(),
            glycemic_index: 50,
            price_tier,
            prep_time_min: prep,
        }
    }

    fn profile() -> PreferenceProfile {
        PreferenceProfile {
            calorie_target: 1600,
            exclude_allergens: vec![],
            dietary_preferences: vec![],
            macro_preferences: MacroPreferences::default(),
            budget_preference: BudgetPreference::Medium,
            prep_time_limit: 30,
        }
    }

    #[test]
    fn test_allergen_substring_match() {
        let mut p = profile();
        p.exclude_allergens = vec!["peanuts".to_string()];

        assert!(!passes_allergens(&food("Trail Mix", "peanuts, tree_nuts", 1, 5), &p));
        assert!(passes_allergens(&food("Oatmeal", "", 1, 5), &p));
    }

    #[test]
    fn test_vegetarian_excludes_meat_names() {
        let mut p = profile();
        p.dietary_preferences = vec![DietTag::Vegetarian];

        assert!(!passes_dietary(&food("Grilled Chicken Breast", "", 2, 20), &p));
        assert!(!passes_dietary(&food("Baked Salmon", "fish", 3, 25), &p));
        assert!(passes_dietary(&food("Greek Yogurt", "dairy", 2, 2), &p));
    }

    #[test]
    fn test_vegan_alone_does_not_exclude_meat() {
        let mut p = profile();
        p.dietary_preferences = vec![DietTag::Vegan];

        assert!(passes_dietary(&food("Grilled Chicken Breast", "", 2, 20), &p));
        assert!(!passes_dietary(&food("Greek Yogurt", "dairy", 2, 2), &p));
        assert!(!passes_dietary(&food("Cheese Sticks", "dairy", 1, 1), &p));
    }

    #[test]
    fn test_prep_limit_is_inclusive() {
        let mut p = profile();
        p.prep_time_limit = 15;

        assert!(within_prep_limit(&food("A", "", 1, 15), &p));
        assert!(!within_prep_limit(&food("B", "", 1, 16), &p));
    }

    #[test]
    fn test_budget_caps_price_tier() {
        let mut p = profile();
        p.budget_preference = BudgetPreference::Low;
        assert!(within_budget(&food("A", "", 1, 5), &p));
        assert!(!within_budget(&food("B", "", 2, 5), &p));

        // Tier-4 items stay unreachable even at high budget.
        p.budget_preference = BudgetPreference::High;
        assert!(!within_budget(&food("C", "", 4, 5), &p));
    }

    #[test]
    fn test_filter_returns_subset() {
        let catalog = vec![
            food("Oatmeal", "", 1, 10),
            food("Grilled Chicken Breast", "", 2, 20),
            food("Truffle Pasta", "wheat", 4, 45),
        ];
        let p = profile();
        let filtered = filter_catalog(&catalog, &p);

        assert!(filtered.len() <= catalog.len());
        for food in &filtered {
            assert!(catalog.iter().any(|c| c.name == food.name));
        }
        // Tier 4 and 45-minute prep both fail under the default profile.
        assert_eq!(filtered.len(), 2);
    }
}
