use serde::{Deserialize, Serialize};

/// A catalog food item with nutrition, cost, and prep metadata.
///
/// The `allergens` field is free text; allergen checks match by
/// case-insensitive substring containment. `price_tier` is an open scale
/// where higher means costlier (the catalog may carry tier-4 items that no
/// budget preference can reach).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub calories: u32,
    pub allergens: String,
    pub protein_g: f64,
    pub fiber_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub cuisine: String,
    pub glycemic_index: u32,
    pub price_tier: u8,
    pub prep_time_min: u32,
}

impl Food {
    /// Canonical key for lookups and "already selected" exclusion.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Case-insensitive check for a substring in the food's name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Whether the free-text allergen field mentions the given tag.
    pub fn has_allergen(&self, tag: &str) -> bool {
        self.allergens.to_lowercase().contains(&tag.to_lowercase())
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{}g Fb:{}g C:{}g F:{}g, GI:{}, tier:{}, prep:{}min",
            self.name,
            self.calories,
            self.protein_g,
            self.fiber_g,
            self.carbs_g,
            self.fat_g,
            self.glycemic_index,
            self.price_tier,
            self.prep_time_min
        )
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Food {}

impl std::hash::Hash for Food {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        Food {
            name: "Greek Yogurt".to_string(),
            calories: 150,
            allergens: "dairy".to_string(),
            protein_g: 15.0,
            fiber_g: 0.0,
            carbs_g: 8.0,
            fat_g: 4.0,
            cuisine: "mediterranean".to_string(),
            glycemic_index: 35,
            price_tier: 2,
            prep_time_min: 2,
        }
    }

    #[test]
    fn test_has_allergen_case_insensitive() {
        let food = sample_food();
        assert!(food.has_allergen("dairy"));
        assert!(food.has_allergen("DAIRY"));
        assert!(!food.has_allergen("peanuts"));
    }

    #[test]
    fn test_name_contains() {
        let food = sample_food();
        assert!(food.name_contains("yogurt"));
        assert!(!food.name_contains("chicken"));
    }

    #[test]
    fn test_equality_case_insensitive() {
        let food1 = sample_food();
        let mut food2 = sample_food();
        food2.name = "GREEK YOGURT".to_string();
        assert_eq!(food1, food2);
    }
}
