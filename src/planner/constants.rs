use crate::models::MealSlot;

/// Minimum candidates required before any slot selection is attempted.
pub const MIN_CANDIDATES: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Scoring weights
// ─────────────────────────────────────────────────────────────────────────────

/// Bonus per gram of protein when high_protein is set.
pub const PROTEIN_WEIGHT: f64 = 2.0;

/// Bonus per gram of fiber when high_fiber is set.
pub const FIBER_WEIGHT: f64 = 3.0;

/// Penalty per gram of carbs when low_carb is set.
pub const CARB_PENALTY: f64 = 0.5;

/// Penalty per gram of fat when low_fat is set.
pub const FAT_PENALTY: f64 = 0.3;

/// Bonus per point of distance below a glycemic index of 100.
pub const GLYCEMIC_WEIGHT: f64 = 0.1;

/// Penalty per minute of prep time.
pub const PREP_TIME_PENALTY: f64 = 0.2;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie distances closer than this are treated as tied and reordered by
/// preference score.
pub const CALORIE_TIE_WINDOW: f64 = 20.0;

/// Size of the head group the randomized pick draws from.
pub const TOP_PICK_POOL: usize = 3;

/// Snack target as a fraction of the other meals' quarter share.
pub const SNACK_TARGET_FACTOR: f64 = 0.6;

// ─────────────────────────────────────────────────────────────────────────────
// Rationale and validation thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum protein grams before the high-protein rationale applies.
pub const RATIONALE_PROTEIN_MIN: f64 = 5.0;

/// Minimum fiber grams before the fiber rationale applies.
pub const RATIONALE_FIBER_MIN: f64 = 2.0;

/// Glycemic index below which a food counts as low-GI.
pub const LOW_GI_THRESHOLD: u32 = 40;

/// Prep time (minutes) below which a food counts as quick to prepare.
pub const QUICK_PREP_THRESHOLD: u32 = 10;

/// Total protein grams for the summary to call a day high-protein.
pub const SUMMARY_HIGH_PROTEIN_TOTAL: f64 = 50.0;

/// Total fiber grams for the summary to call a day high-fiber.
pub const SUMMARY_HIGH_FIBER_TOTAL: f64 = 20.0;

/// Fraction of the calorie target within which totals count as on-target.
pub const CALORIE_TOLERANCE: f64 = 0.1;

/// Slot-specific name keywords and the bonus applied when any matches.
pub fn slot_bonus(slot: MealSlot) -> (&'static [&'static str], f64) {
    match slot {
        MealSlot::Breakfast => (&["oatmeal", "yogurt", "egg"], 10.0),
        MealSlot::Lunch => (&["salad", "quinoa", "bean"], 8.0),
        MealSlot::Dinner => (&["salmon", "chicken", "tofu"], 12.0),
        MealSlot::Snack => (&["nut", "fruit", "cheese"], 6.0),
    }
}

/// Name keywords excluded for vegetarian profiles.
pub const VEGETARIAN_EXCLUDED_NAMES: &[&str] = &["chicken", "salmon", "fish"];

/// Additional name keywords excluded for vegan profiles.
///
/// Deliberately does not repeat the vegetarian meat list; the two rule sets
/// are independent and both apply only when both tags are present.
pub const VEGAN_EXCLUDED_NAMES: &[&str] = &["yogurt", "cheese", "egg"];
