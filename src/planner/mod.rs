pub mod assembly;
pub mod constants;
pub mod filter;
pub mod scoring;
pub mod selection;

pub use assembly::{assemble, build_day_summary, build_rationale, validate};
pub use constants::*;
pub use filter::{filter_catalog, passes_allergens, passes_dietary, within_budget, within_prep_limit};
pub use scoring::score_food;
pub use selection::select_meal;
