//! Utility to check a recipe file against a pantry file
//!
//! Usage: check_recipe <pantry.json> <recipe.json> [--shopping-list]

use std::path::PathBuf;
use std::process::ExitCode;

use pantry::availability::find_missing_on;
use pantry::config::Config;
use pantry::models::shopping_list_for;
use pantry::snapshot::{load_pantry, load_recipe};

fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let shopping_list = args.iter().any(|a| a == "--shopping-list");
    let paths: Vec<PathBuf> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .collect();

    let [pantry_path, recipe_path] = paths.as_slice() else {
        return Err("usage: check_recipe <pantry.json> <recipe.json> [--shopping-list]".into());
    };

    let config = Config::from_env()?;
    let pantry = load_pantry(pantry_path)?;
    let recipe = load_recipe(recipe_path)?;

    let missing = find_missing_on(&recipe.ingredients, &pantry, config.today());
    eprintln!(
        "{}: {} of {} ingredients missing ({} pantry entries, as of {})",
        recipe.name,
        missing.len(),
        recipe.ingredients.len(),
        pantry.len(),
        config.today()
    );

    let json = if shopping_list {
        serde_json::to_string_pretty(&shopping_list_for(&missing, &config.shopping_category))?
    } else {
        serde_json::to_string_pretty(&missing)?
    };
    println!("{}", json);

    Ok(missing.is_empty())
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
