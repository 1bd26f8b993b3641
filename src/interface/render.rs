use crate::models::{DayPlan, Food, PreferenceProfile};

/// Display the parsed preference record.
pub fn display_profile(profile: &PreferenceProfile) {
    println!();
    println!("=== Parsed Profile ===");
    println!("Calorie target: {} kcal", profile.calorie_target);

    let allergens = if profile.exclude_allergens.is_empty() {
        "(none)".to_string()
    } else {
        profile.exclude_allergens.join(", ")
    };
    println!("Excluded allergens: {}", allergens);

    let diets = if profile.dietary_preferences.is_empty() {
        "(none)".to_string()
    } else {
        profile
            .dietary_preferences
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("Dietary preferences: {}", diets);

    let macros = &profile.macro_preferences;
    let mut flags = Vec::new();
    if macros.high_protein {
        flags.push("high protein");
    }
    if macros.high_fiber {
        flags.push("high fiber");
    }
    if macros.low_carb {
        flags.push("low carb");
    }
    if macros.low_fat {
        flags.push("low fat");
    }
    let macros_str = if flags.is_empty() {
        "(none)".to_string()
    } else {
        flags.join(", ")
    };
    println!("Macro preferences: {}", macros_str);

    println!("Budget: {}", profile.budget_preference.label());
    println!("Prep time limit: {} min", profile.prep_time_limit);
    println!();
}

/// Display a full day plan: meals with rationale, totals, summary, checks.
pub fn display_day_plan(plan: &DayPlan) {
    println!();
    println!("=== Day Plan ===");
    println!();

    let max_name_len = plan
        .explanations
        .iter()
        .map(|e| e.food.name.len())
        .max()
        .unwrap_or(10);

    for explanation in &plan.explanations {
        println!(
            "{:<10} {:<width$} {:>4} kcal | {}",
            explanation.meal.label(),
            explanation.food.name,
            explanation.food.calories,
            explanation.rationale,
            width = max_name_len
        );
    }

    let totals = &plan.meal_plan;
    println!();
    println!("--- Totals ---");
    println!(
        "{} kcal | protein {}g | fiber {}g | carbs {}g | fat {}g",
        totals.total_calories,
        totals.total_protein,
        totals.total_fiber,
        totals.total_carbs,
        totals.total_fat
    );

    println!();
    println!("{}", plan.day_summary);

    let checks = &plan.validation_checks;
    println!();
    println!("--- Validation ---");
    println!("Allergens clear:       {}", check_mark(checks.allergens_clear));
    println!("Calories within range: {}", check_mark(checks.calories_within_range));
    println!("All meals explained:   {}", check_mark(checks.all_meals_explained));
    println!();
}

fn check_mark(ok: bool) -> &'static str {
    if ok { "yes" } else { "NO" }
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!("  {}", food.debug_string());
    }

    println!();
}
