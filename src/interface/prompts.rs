use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Food;

/// Example profile texts offered as input defaults.
pub const SAMPLE_PROFILES: &[&str] = &[
    "38f, vegetarian, avoid peanuts; weight loss ~1600 kcal; prefers higher protein & fiber.",
    "25m, keto diet, no dairy; muscle gain ~2200 kcal; high protein, low carb, budget conscious.",
    "45f, vegan, gluten-free, allergic to tree nuts; maintenance ~1800 kcal; quick prep meals only, premium budget.",
];

/// Prompt for the free-text dietary profile.
pub fn prompt_profile_text() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Describe your dietary profile")
        .default(SAMPLE_PROFILES[0].to_string())
        .interact_text()?;

    Ok(input)
}

/// Prompt for a plan modification request. Empty input means done.
pub fn prompt_substitution_request() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Any changes? (e.g. \"make it quick\", Enter to finish)")
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Find a catalog food by name, falling back to fuzzy matching.
///
/// Exact case-insensitive match wins; otherwise candidates above a 0.7
/// Jaro-Winkler similarity are offered for selection.
pub fn find_food<'a>(catalog: &'a [Food], query: &str) -> Result<Option<&'a Food>> {
    let query_lower = query.to_lowercase();

    if let Some(food) = catalog.iter().find(|f| f.key() == query_lower) {
        return Ok(Some(food));
    }

    let mut candidates: Vec<(&Food, f64)> = catalog
        .iter()
        .map(|f| (f, jaro_winkler(&f.key(), &query_lower)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;

        return Ok(if confirm { Some(food) } else { None });
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(f, _)| f.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}
