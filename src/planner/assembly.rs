use std::collections::HashSet;

use rand::Rng;

use crate::error::{PlanError, Result};
use crate::models::{
    DayPlan, Food, MealExplanation, MealSelection, MealSlot, PreferenceProfile, ValidationChecks,
};
use crate::planner::constants::*;
use crate::planner::filter::filter_catalog;
use crate::planner::selection::select_meal;

/// Assemble a full day plan for the profile.
///
/// Filters the catalog once, then selects breakfast, lunch, dinner, and
/// snack in that fixed order, excluding already-chosen names so the four
/// foods stay pairwise distinct. The order is load-bearing: earlier slots
/// have first pick of the pool and the snack runs against a lower calorie
/// target.
pub fn assemble(
    catalog: &[Food],
    profile: &PreferenceProfile,
    rng: &mut impl Rng,
) -> Result<DayPlan> {
    let available = filter_catalog(catalog, profile);
    if available.len() < MIN_CANDIDATES {
        return Err(PlanError::InsufficientCandidates {
            found: available.len(),
        });
    }

    let quarter_target = profile.calorie_target as f64 / 4.0;
    // Snack runs at 0.6x the other meals' quarter share.
    let snack_target = quarter_target * SNACK_TARGET_FACTOR;

    let mut taken: HashSet<String> = HashSet::new();

    let breakfast = pick_slot(&available, &taken, profile, MealSlot::Breakfast, quarter_target, rng)?;
    taken.insert(breakfast.key());

    let lunch = pick_slot(&available, &taken, profile, MealSlot::Lunch, quarter_target, rng)?;
    taken.insert(lunch.key());

    let dinner = pick_slot(&available, &taken, profile, MealSlot::Dinner, quarter_target, rng)?;
    taken.insert(dinner.key());

    let snack = pick_slot(&available, &taken, profile, MealSlot::Snack, snack_target, rng)?;

    let meal_plan = MealSelection::new(breakfast, lunch, dinner, snack);

    let explanations = MealSlot::ALL
        .iter()
        .map(|&slot| MealExplanation {
            meal: slot,
            food: meal_plan.food_for(slot).clone(),
            rationale: build_rationale(meal_plan.food_for(slot), profile, slot),
        })
        .collect();

    let day_summary = build_day_summary(profile, &meal_plan);
    let validation_checks = validate(&meal_plan, profile);

    Ok(DayPlan {
        profile_used: profile.clone(),
        meal_plan,
        explanations,
        day_summary,
        validation_checks,
    })
}

/// Select one food for a slot from the pool minus already-taken names.
fn pick_slot(
    available: &[&Food],
    taken: &HashSet<String>,
    profile: &PreferenceProfile,
    slot: MealSlot,
    target_calories: f64,
    rng: &mut impl Rng,
) -> Result<Food> {
    let remaining: Vec<&Food> = available
        .iter()
        .copied()
        .filter(|f| !taken.contains(&f.key()))
        .collect();

    select_meal(&remaining, profile, slot, target_calories, rng)
        .cloned()
        .ok_or(PlanError::InsufficientCandidates {
            found: remaining.len(),
        })
}

/// Human-readable reasons a food was chosen for a slot.
///
/// Lists every satisfied criterion as a phrase, joined with ", ". Falls
/// back to a generic phrase when nothing specific applies.
pub fn build_rationale(food: &Food, profile: &PreferenceProfile, slot: MealSlot) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if profile.macro_preferences.high_protein && food.protein_g > RATIONALE_PROTEIN_MIN {
        reasons.push(format!("high protein ({}g)", food.protein_g));
    }

    if profile.macro_preferences.high_fiber && food.fiber_g > RATIONALE_FIBER_MIN {
        reasons.push(format!("good fiber content ({}g)", food.fiber_g));
    }

    if food.glycemic_index < LOW_GI_THRESHOLD {
        reasons.push("low glycemic index for stable energy".to_string());
    }

    if food.prep_time_min < QUICK_PREP_THRESHOLD {
        reasons.push("quick to prepare".to_string());
    }

    if slot == MealSlot::Breakfast
        && (food.name_contains("oatmeal") || food.name_contains("yogurt"))
    {
        reasons.push("ideal breakfast food".to_string());
    }

    if slot == MealSlot::Dinner && (food.name_contains("salmon") || food.name_contains("chicken")) {
        reasons.push("satisfying dinner protein".to_string());
    }

    if reasons.is_empty() {
        reasons.push("balanced nutrition and fits dietary constraints".to_string());
    }

    reasons.join(", ")
}

/// Templated one-paragraph summary of the day.
pub fn build_day_summary(profile: &PreferenceProfile, meal_plan: &MealSelection) -> String {
    let target = profile.calorie_target as f64;
    let calorie_diff = (meal_plan.total_calories as f64 - target).abs();
    let calorie_status = if calorie_diff <= target * CALORIE_TOLERANCE {
        "perfectly"
    } else {
        "closely"
    };

    let protein_status = if profile.macro_preferences.high_protein
        && meal_plan.total_protein > SUMMARY_HIGH_PROTEIN_TOTAL
    {
        "high-protein"
    } else {
        "balanced"
    };

    let fiber_status = if profile.macro_preferences.high_fiber
        && meal_plan.total_fiber > SUMMARY_HIGH_FIBER_TOTAL
    {
        "high-fiber"
    } else {
        "moderate-fiber"
    };

    format!(
        "This {}, {} meal plan delivers {} calories, {} matching your {} kcal target. \
         The day includes {} for breakfast, {} for lunch, {} for dinner, and {} as a snack. \
         All meals respect your dietary preferences and allergen restrictions while providing \
         balanced nutrition throughout the day.",
        protein_status,
        fiber_status,
        meal_plan.total_calories,
        calorie_status,
        profile.calorie_target,
        meal_plan.breakfast.name,
        meal_plan.lunch.name,
        meal_plan.dinner.name,
        meal_plan.snack.name
    )
}

/// Validation flags for an assembled selection.
pub fn validate(meal_plan: &MealSelection, profile: &PreferenceProfile) -> ValidationChecks {
    let allergens_clear = meal_plan.foods().iter().all(|food| {
        !profile
            .exclude_allergens
            .iter()
            .any(|tag| food.has_allergen(tag))
    });

    let target = profile.calorie_target as f64;
    let calories_within_range =
        (meal_plan.total_calories as f64 - target).abs() <= target * CALORIE_TOLERANCE;

    ValidationChecks {
        allergens_clear,
        calories_within_range,
        // Structural: every slot receives an explanation during assembly.
        all_meals_explained: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPreference, MacroPreferences};

    fn food(name: &str, calories: u32, protein: f64, fiber: f64, gi: u32, prep: u32) -> Food {
        Food {
            name: name.to_string(),
            calories,
            allergens: String::new(),
            protein_g: protein,
            fiber_g: fiber,
            carbs_g: 20.0,
            fat_g: 5.0,
            cuisine: "test".to_string(),
            glycemic_index: gi,
            price_tier: 1,
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
    fn test_rationale_lists_satisfied_criteria() {
        let mut p = profile();
        p.macro_preferences.high_protein = true;
        let f = food("Greek Yogurt", 150, 15.0, 0.0, 35, 2);

        let rationale = build_rationale(&f, &p, MealSlot::Breakfast);
        assert!(rationale.contains("high protein (15g)"));
        assert!(rationale.contains("low glycemic index for stable energy"));
        assert!(rationale.contains("quick to prepare"));
        assert!(rationale.contains("ideal breakfast food"));
    }

    #[test]
    fn test_rationale_fallback_phrase() {
        let p = profile();
        let f = food("Plain Rice Bowl", 400, 4.0, 1.0, 70, 20);

        assert_eq!(
            build_rationale(&f, &p, MealSlot::Lunch),
            "balanced nutrition and fits dietary constraints"
        );
    }

    #[test]
    fn test_rationale_protein_threshold_requires_flag() {
        // High protein food but no preference flag: phrase must not appear.
        let p = profile();
        let f = food("Grilled Chicken Breast", 280, 35.0, 0.0, 70, 20);

        let rationale = build_rationale(&f, &p, MealSlot::Dinner);
        assert!(!rationale.contains("high protein"));
        assert!(rationale.contains("satisfying dinner protein"));
    }

    #[test]
    fn test_summary_reports_perfect_calorie_match() {
        let p = profile();
        let selection = MealSelection::new(
            food("A", 400, 5.0, 2.0, 50, 10),
            food("B", 400, 5.0, 2.0, 50, 10),
            food("C", 400, 5.0, 2.0, 50, 10),
            food("D", 400, 5.0, 2.0, 50, 10),
        );

        let summary = build_day_summary(&p, &selection);
        assert!(summary.contains("perfectly matching your 1600 kcal target"));
        assert!(summary.contains("balanced, moderate-fiber"));
    }

    #[test]
    fn test_summary_reports_close_calorie_match() {
        let p = profile();
        let selection = MealSelection::new(
            food("A", 500, 5.0, 2.0, 50, 10),
            food("B", 500, 5.0, 2.0, 50, 10),
            food("C", 500, 5.0, 2.0, 50, 10),
            food("D", 500, 5.0, 2.0, 50, 10),
        );

        let summary = build_day_summary(&p, &selection);
        assert!(summary.contains("closely matching"));
    }

    #[test]
    fn test_validate_allergens_clear_flag() {
        let mut p = profile();
        p.exclude_allergens = vec!["dairy".to_string()];

        let mut tainted = food("Cheese Plate", 300, 10.0, 0.0, 30, 5);
        tainted.allergens = "dairy".to_string();
        let selection = MealSelection::new(
            food("A", 400, 5.0, 2.0, 50, 10),
            food("B", 400, 5.0, 2.0, 50, 10),
            food("C", 400, 5.0, 2.0, 50, 10),
            tainted,
        );

        let checks = validate(&selection, &p);
        assert!(!checks.allergens_clear);
        assert!(checks.all_meals_explained);
    }

    #[test]
    fn test_insufficient_candidates_under_four() {
        let catalog = vec![
            food("A", 400, 5.0, 2.0, 50, 10),
            food("B", 400, 5.0, 2.0, 50, 10),
            food("C", 400, 5.0, 2.0, 50, 10),
        ];
        let p = profile();
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);

        let result = assemble(&catalog, &p, &mut rng);
        assert!(matches!(
            result,
            Err(PlanError::InsufficientCandidates { found: 3 })
        ));
    }

    #[test]
    fn test_assembled_plan_has_distinct_meals() {
        let catalog = vec![
            food("Oatmeal", 350, 6.0, 4.0, 55, 10),
            food("Quinoa Salad", 420, 9.0, 5.0, 45, 20),
            food("Tofu Stir Fry", 450, 18.0, 4.0, 40, 25),
            food("Fruit Cup", 120, 1.0, 2.0, 45, 5),
            food("Lentil Soup", 380, 12.0, 8.0, 30, 25),
        ];
        let p = profile();
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);

        let plan = assemble(&catalog, &p, &mut rng).unwrap();
        let names: std::collections::HashSet<String> =
            plan.meal_plan.foods().iter().map(|f| f.key()).collect();
        assert_eq!(names.len(), 4);
        assert_eq!(plan.explanations.len(), 4);
    }
}
