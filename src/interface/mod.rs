pub mod prompts;
pub mod render;

pub use prompts::{
    find_food, prompt_profile_text, prompt_substitution_request, prompt_yes_no, SAMPLE_PROFILES,
};
pub use render::{display_day_plan, display_food_list, display_profile};
