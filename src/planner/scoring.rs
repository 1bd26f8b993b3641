use crate::models::{Food, MealSlot, PreferenceProfile};
use crate::planner::constants::*;

/// Preference score for a food in a given slot. Higher is better.
///
/// Purely additive: macro nudges, a slot-specific name bonus, a universal
/// low-glycemic bonus, and a prep-time penalty.
pub fn score_food(food: &Food, profile: &PreferenceProfile, slot: MealSlot) -> f64 {
    let mut score = 0.0;

    let macros = &profile.macro_preferences;
    if macros.high_protein {
        score += food.protein_g * PROTEIN_WEIGHT;
    }
    if macros.high_fiber {
        score += food.fiber_g * FIBER_WEIGHT;
    }
    if macros.low_carb {
        score -= food.carbs_g * CARB_PENALTY;
    }
    if macros.low_fat {
        score -= food.fat_g * FAT_PENALTY;
    }

    let (keywords, bonus) = slot_bonus(slot);
    if keywords.iter().any(|k| food.name_contains(k)) {
        score += bonus;
    }

    score += (100.0 - food.glycemic_index as f64) * GLYCEMIC_WEIGHT;
    score -= food.prep_time_min as f64 * PREP_TIME_PENALTY;

    score
}
