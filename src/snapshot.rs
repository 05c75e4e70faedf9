//! Snapshot files
//!
//! Loads pantry and recipe snapshots exported as JSON, for offline checks.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Recipe, RequiredIngredient, StockEntry};

/// Snapshot loading error types
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for snapshot loading
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// A recipe file holds either a full recipe or just its ingredient list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeFile {
    Recipe(Recipe),
    Ingredients(Vec<RequiredIngredient>),
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> SnapshotResult<T> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SnapshotError::Json {
        path: display,
        source,
    })
}

/// Load a pantry snapshot: a JSON array of stock entries
pub fn load_pantry(path: &Path) -> SnapshotResult<Vec<StockEntry>> {
    read_json(path)
}

/// Load a recipe snapshot; a bare ingredient array is named after the file
pub fn load_recipe(path: &Path) -> SnapshotResult<Recipe> {
    match read_json::<RecipeFile>(path)? {
        RecipeFile::Recipe(recipe) => Ok(recipe),
        RecipeFile::Ingredients(ingredients) => {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "recipe".to_string());
            Ok(Recipe::new(name, ingredients))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pantry-snapshot-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_pantry() {
        let path = write_temp(
            "pantry.json",
            r#"[{"name":"Eggs","amount":12,"unit":"pcs","expiryDate":"2099-01-01"}]"#,
        );
        let pantry = load_pantry(&path).unwrap();
        assert_eq!(pantry.len(), 1);
        assert_eq!(pantry[0].name, "Eggs");
    }

    #[test]
    fn test_load_recipe_object_or_array() {
        let path = write_temp("cake.json", r#"{"name":"Cake","ingredients":["Eggs"]}"#);
        assert_eq!(load_recipe(&path).unwrap().name, "Cake");

        let path = write_temp("omelette.json", r#"["Eggs", {"name":"Milk","amount":"50","unit":"ml"}]"#);
        let recipe = load_recipe(&path).unwrap();
        assert_eq!(recipe.name, "omelette");
        assert_eq!(recipe.ingredients.len(), 2);
    }

    #[test]
    fn test_errors_name_the_file() {
        let missing = std::env::temp_dir().join("pantry-snapshot-does-not-exist.json");
        let err = load_pantry(&missing).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(err.to_string().contains("pantry-snapshot-does-not-exist.json"));

        let path = write_temp("broken.json", "{not json");
        assert!(matches!(load_pantry(&path).unwrap_err(), SnapshotError::Json { .. }));
    }
}
