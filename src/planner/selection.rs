use rand::Rng;

use crate::models::{Food, MealSlot, PreferenceProfile};
use crate::planner::constants::{CALORIE_TIE_WINDOW, TOP_PICK_POOL};
use crate::planner::scoring::score_food;

/// Candidate food with its computed selection keys.
#[derive(Debug)]
struct Candidate<'a> {
    food: &'a Food,
    score: f64,
    calorie_diff: f64,
}

/// Pick one food for a slot from the given candidates.
///
/// Candidates are ordered by absolute calorie distance from the target,
/// except that two candidates within [`CALORIE_TIE_WINDOW`] of each other
/// count as tied and fall back to preference score, descending. The final
/// pick is uniform over the best [`TOP_PICK_POOL`] entries (or fewer), which
/// injects day-to-day variety while still biasing toward calorie accuracy.
///
/// The random source is injected so tests can pin the pick with a seeded
/// generator. Returns `None` only when `candidates` is empty.
pub fn select_meal<'a>(
    candidates: &[&'a Food],
    profile: &PreferenceProfile,
    slot: MealSlot,
    target_calories: f64,
    rng: &mut impl Rng,
) -> Option<&'a Food> {
    let mut scored: Vec<Candidate<'a>> = candidates
        .iter()
        .map(|food| Candidate {
            food,
            score: score_food(food, profile, slot),
            calorie_diff: (food.calories as f64 - target_calories).abs(),
        })
        .collect();

    scored.sort_by(|a, b| {
        if (a.calorie_diff - b.calorie_diff).abs() < CALORIE_TIE_WINDOW {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        } else {
            a.calorie_diff
                .partial_cmp(&b.calorie_diff)
                .unwrap_or(std::cmp::Ordering::Equal)
        }
    });

    let pool = scored.len().min(TOP_PICK_POOL);
    if pool == 0 {
        return None;
    }

    Some(scored[rng.gen_range(0..pool)].food)
}
