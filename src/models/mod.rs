mod food;
mod plan;
mod profile;

pub use food::Food;
pub use plan::{DayPlan, MealExplanation, MealSelection, MealSlot, ValidationChecks};
pub use profile::{BudgetPreference, DietTag, MacroPreferences, PreferenceProfile};
