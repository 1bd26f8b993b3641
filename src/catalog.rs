use std::path::Path;

use crate::error::Result;
use crate::models::Food;

/// Load the food catalog from a CSV file.
///
/// Expected header: `name,calories,allergens,protein_g,fiber_g,carbs_g,
/// fat_g,cuisine,glycemic_index,price_tier,prep_time_min`.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for record in reader.deserialize() {
        let food: Food = record?;
        foods.push(food);
    }
    Ok(foods)
}

/// Load the catalog, degrading to an empty list on any read failure.
///
/// The decision core treats an empty catalog as any other short pool and
/// surfaces `InsufficientCandidates`, so callers that cannot recover a
/// missing file get a constraint-level message instead of a crash.
pub fn load_catalog_or_empty<P: AsRef<Path>>(path: P) -> Vec<Food> {
    match load_catalog(&path) {
        Ok(foods) => foods,
        Err(e) => {
            eprintln!(
                "Warning: could not read catalog {}: {}",
                path.as_ref().display(),
                e
            );
            Vec::new()
        }
    }
}
