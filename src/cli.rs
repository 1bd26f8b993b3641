use clap::{Parser, Subcommand};

/// MealDraft — turns a free-text dietary profile into an annotated day plan.
#[derive(Parser, Debug)]
#[command(name = "mealdraft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(short, long, default_value = "data/foods.csv")]
    pub catalog: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a day plan from a dietary profile.
    Plan {
        /// Free-text profile. Prompts interactively when omitted.
        #[arg(short, long)]
        profile: Option<String>,

        /// Seed for the meal-variety randomness, for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the plan as JSON instead of the interactive view.
        #[arg(long)]
        json: bool,
    },

    /// List the catalog, or look up one food by (fuzzy) name.
    Foods {
        /// Food name to look up.
        query: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: None,
            seed: None,
            json: false,
        }
    }
}
