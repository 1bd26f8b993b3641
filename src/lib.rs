pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod parser;
pub mod planner;
pub mod substitution;

pub use error::{PlanError, Result};
pub use models::{DayPlan, Food, MealSelection, MealSlot, PreferenceProfile};
