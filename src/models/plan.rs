use serde::{Deserialize, Serialize};

use crate::models::{Food, PreferenceProfile};

/// One of the four meal positions in a day plan.
///
/// The order of the variants is the selection order: earlier slots pick
/// first and later slots see a pool shrunk by name exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// All slots in selection order.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }
}

/// The four selected foods plus aggregate macro totals.
///
/// The foods are pairwise distinct by name; selection enforces this by
/// excluding already-chosen names from later slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSelection {
    pub breakfast: Food,
    pub lunch: Food,
    pub dinner: Food,
    pub snack: Food,
    pub total_calories: u32,
    pub total_protein: f64,
    pub total_fiber: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

impl MealSelection {
    /// Build a selection from the four foods, deriving the totals.
    pub fn new(breakfast: Food, lunch: Food, dinner: Food, snack: Food) -> Self {
        let foods = [&breakfast, &lunch, &dinner, &snack];
        let total_calories = foods.iter().map(|f| f.calories).sum();
        let total_protein = foods.iter().map(|f| f.protein_g).sum();
        let total_fiber = foods.iter().map(|f| f.fiber_g).sum();
        let total_carbs = foods.iter().map(|f| f.carbs_g).sum();
        let total_fat = foods.iter().map(|f| f.fat_g).sum();

        Self {
            breakfast,
            lunch,
            dinner,
            snack,
            total_calories,
            total_protein,
            total_fiber,
            total_carbs,
            total_fat,
        }
    }

    /// The four foods in slot order.
    pub fn foods(&self) -> [&Food; 4] {
        [&self.breakfast, &self.lunch, &self.dinner, &self.snack]
    }

    pub fn food_for(&self, slot: MealSlot) -> &Food {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snack,
        }
    }
}

/// A chosen food with the human-readable reasons it was picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealExplanation {
    pub meal: MealSlot,
    pub food: Food,
    pub rationale: String,
}

/// Post-construction validation flags for a day plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationChecks {
    pub allergens_clear: bool,
    pub calories_within_range: bool,
    pub all_meals_explained: bool,
}

/// A fully assembled day plan.
///
/// Constructed atomically by the assembler and never mutated afterwards; a
/// substitution request produces an entirely new plan from a modified copy
/// of the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub profile_used: PreferenceProfile,
    pub meal_plan: MealSelection,
    pub explanations: Vec<MealExplanation>,
    pub day_summary: String,
    pub validation_checks: ValidationChecks,
}
