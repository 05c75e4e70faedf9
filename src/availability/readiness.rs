//! Recipe readiness
//!
//! Badges a list of recipes as ready to cook or short on ingredients,
//! all against the same pantry snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use super::matcher::find_missing_on;
use crate::models::{Recipe, RequiredIngredient, StockEntry};

/// Readiness of one recipe
#[derive(Debug, Clone, Serialize)]
pub struct RecipeReadiness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub can_make: bool,
    pub missing_count: usize,
    pub missing: Vec<RequiredIngredient>,
    pub status: String,
}

/// Badge text for a recipe with `missing_count` missing ingredients
pub fn readiness_label(missing_count: usize) -> String {
    match missing_count {
        0 => "Ready to Cook!".to_string(),
        n => format!("Missing {} items", n),
    }
}

/// Readiness of a single recipe as of `today`
pub fn recipe_readiness_on(recipe: &Recipe, pantry: &[StockEntry], today: NaiveDate) -> RecipeReadiness {
    let missing = find_missing_on(&recipe.ingredients, pantry, today);
    RecipeReadiness {
        id: recipe.id.clone(),
        name: recipe.name.clone(),
        can_make: missing.is_empty(),
        missing_count: missing.len(),
        status: readiness_label(missing.len()),
        missing,
    }
}

/// Readiness of every recipe, in the order given
pub fn check_recipes_on(recipes: &[Recipe], pantry: &[StockEntry], today: NaiveDate) -> Vec<RecipeReadiness> {
    recipes
        .iter()
        .map(|recipe| recipe_readiness_on(recipe, pantry, today))
        .collect()
}
