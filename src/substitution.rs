use rand::Rng;

use crate::error::Result;
use crate::models::{DayPlan, DietTag, Food, PreferenceProfile};
use crate::planner::assemble;

/// Profile mutation triggered by a substitution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionAction {
    EnableLowCarb,
    EnableHighProtein,
    AddVegetarian,
    QuickPrep,
    LowBudget,
}

/// Trigger table, evaluated in order; only the first matching rule fires.
pub const SUBSTITUTION_RULES: &[(&[&str], SubstitutionAction)] = &[
    (&["lower carb", "low carb"], SubstitutionAction::EnableLowCarb),
    (&["higher protein", "high protein"], SubstitutionAction::EnableHighProtein),
    (&["vegetarian", "veggie"], SubstitutionAction::AddVegetarian),
    (&["quick", "fast"], SubstitutionAction::QuickPrep),
    (&["cheap", "budget"], SubstitutionAction::LowBudget),
];

/// Match a free-text request against the trigger table.
pub fn match_request(request: &str) -> Option<SubstitutionAction> {
    let text = request.to_lowercase();
    SUBSTITUTION_RULES
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| text.contains(p)))
        .map(|(_, action)| *action)
}

/// Apply an action to a copy of the profile.
pub fn apply_action(profile: &PreferenceProfile, action: SubstitutionAction) -> PreferenceProfile {
    let mut modified = profile.clone();
    match action {
        SubstitutionAction::EnableLowCarb => modified.macro_preferences.low_carb = true,
        SubstitutionAction::EnableHighProtein => modified.macro_preferences.high_protein = true,
        SubstitutionAction::AddVegetarian => modified.dietary_preferences.push(DietTag::Vegetarian),
        SubstitutionAction::QuickPrep => modified.prep_time_limit = 15,
        SubstitutionAction::LowBudget => {
            modified.budget_preference = crate::models::BudgetPreference::Low
        }
    }
    modified
}

/// Rework an existing plan from a free-text modification request.
///
/// On a match the original plan's profile is copied, mutated, and fed back
/// through full assembly, so any of the four meals may change, not just the
/// attribute the request implies. An unrecognized request yields `None`;
/// the caller keeps the original plan (a no-op, not an error).
pub fn substitute(
    catalog: &[Food],
    plan: &DayPlan,
    request: &str,
    rng: &mut impl Rng,
) -> Result<Option<DayPlan>> {
    match match_request(request) {
        Some(action) => {
            let modified = apply_action(&plan.profile_used, action);
            assemble(catalog, &modified, rng).map(Some)
        }
        None => Ok(None),
    }
}
