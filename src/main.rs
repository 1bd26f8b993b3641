use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mealdraft_rs::catalog::load_catalog_or_empty;
use mealdraft_rs::cli::{Cli, Command};
use mealdraft_rs::error::{PlanError, Result};
use mealdraft_rs::interface::{
    display_day_plan, display_food_list, display_profile, find_food, prompt_profile_text,
    prompt_substitution_request, prompt_yes_no,
};
use mealdraft_rs::models::Food;
use mealdraft_rs::parser;
use mealdraft_rs::planner::assemble;
use mealdraft_rs::substitution::substitute;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            profile,
            seed,
            json,
        } => cmd_plan(&cli.catalog, profile, seed, json),
        Command::Foods { query } => cmd_foods(&cli.catalog, query),
    }
}

/// Parse a profile, assemble a plan, then loop on modification requests.
fn cmd_plan(
    catalog_path: &str,
    profile_text: Option<String>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog_or_empty(catalog_path);
    println!("Loaded {} foods from {}", catalog.len(), catalog_path);

    let text = match profile_text {
        Some(text) => text,
        None => prompt_profile_text()?,
    };

    let profile = parser::parse(&text);

    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let plan = match assemble(&catalog, &profile, &mut rng) {
        Ok(plan) => plan,
        Err(PlanError::InsufficientCandidates { found }) => {
            display_profile(&profile);
            println!(
                "Could not build a plan: only {} food(s) satisfy these constraints.",
                found
            );
            println!("Try relaxing the allergen, budget, or prep-time requirements.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    display_profile(&plan.profile_used);
    display_day_plan(&plan);

    // Substitution loop: each request replans in full under the modified
    // profile, so all four meals may change.
    let mut current = plan;
    loop {
        let request = prompt_substitution_request()?;
        if request.is_empty() {
            break;
        }

        match substitute(&catalog, &current, &request, &mut rng) {
            Ok(Some(new_plan)) => {
                display_day_plan(&new_plan);
                if prompt_yes_no("Keep this plan?", true)? {
                    current = new_plan;
                }
            }
            Ok(None) => {
                println!("No recognized change in that request; plan unchanged.");
            }
            Err(PlanError::InsufficientCandidates { found }) => {
                println!(
                    "That change leaves only {} suitable food(s); keeping the current plan.",
                    found
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// List the catalog or fuzzy-look-up a single food.
fn cmd_foods(catalog_path: &str, query: Option<String>) -> Result<()> {
    let catalog = load_catalog_or_empty(catalog_path);

    if catalog.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    match query {
        None => {
            let all: Vec<&Food> = catalog.iter().collect();
            display_food_list(&all, "Catalog");
        }
        Some(query) => match find_food(&catalog, &query)? {
            Some(food) => {
                println!("{}", food.debug_string());
                let allergens = if food.allergens.is_empty() {
                    "(none)"
                } else {
                    food.allergens.as_str()
                };
                println!("Allergens: {}", allergens);
                println!("Cuisine: {}", food.cuisine);
            }
            None => println!("No matching food found for '{}'", query),
        },
    }

    Ok(())
}
