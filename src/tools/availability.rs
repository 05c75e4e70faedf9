//! Availability MCP Tools
//!
//! Tools for checking recipes against a pantry snapshot.

use serde::Serialize;

use crate::availability::{
    assess_recipe_on, check_recipes_on, days_until_expiry, expiry_report_on, expiry_status_on,
    find_missing_on, is_expired_on, readiness_label, ExpiryReportEntry, ExpiryStatus,
    IngredientAvailability, RecipeReadiness,
};
use crate::config::Config;
use crate::models::{shopping_list_for, Recipe, RequiredIngredient, ShoppingListItem, StockEntry};
use crate::quantity::{normalize, Amount, Axis};

/// Response for normalize_quantity
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub amount: Amount,
    pub unit: String,
    pub value: f64,
    pub axis: Axis,
    pub base_unit: &'static str,
}

/// Response for find_missing_ingredients
#[derive(Debug, Serialize)]
pub struct FindMissingResponse {
    pub today: String,
    pub can_make: bool,
    pub missing_count: usize,
    pub missing: Vec<RequiredIngredient>,
}

/// Response for can_make_recipe
#[derive(Debug, Serialize)]
pub struct CanMakeResponse {
    pub can_make: bool,
    pub missing_count: usize,
    pub status: String,
}

/// Response for assess_recipe
#[derive(Debug, Serialize)]
pub struct AssessRecipeResponse {
    pub today: String,
    pub can_make: bool,
    pub ingredients: Vec<IngredientAvailability>,
}

/// Response for check_recipes
#[derive(Debug, Serialize)]
pub struct CheckRecipesResponse {
    pub today: String,
    pub ready_count: usize,
    pub recipes: Vec<RecipeReadiness>,
}

/// Response for check_expiry
#[derive(Debug, Serialize)]
pub struct CheckExpiryResponse {
    pub date: String,
    pub today: String,
    pub expired: bool,
    pub days_until_expiry: Option<i64>,
    pub status: ExpiryStatus,
    pub label: Option<&'static str>,
}

/// Response for pantry_expiry_report
#[derive(Debug, Serialize)]
pub struct ExpiryReportResponse {
    pub today: String,
    pub expired_count: usize,
    pub expiring_soon_count: usize,
    pub entries: Vec<ExpiryReportEntry>,
}

/// Response for missing_to_shopping_list
#[derive(Debug, Serialize)]
pub struct ShoppingListResponse {
    pub count: usize,
    pub items: Vec<ShoppingListItem>,
}

/// Response for purchased_to_pantry
#[derive(Debug, Serialize)]
pub struct RestockResponse {
    pub today: String,
    pub count: usize,
    pub entries: Vec<StockEntry>,
}

fn format_today(config: &Config) -> String {
    config.today().format("%Y-%m-%d").to_string()
}

pub fn normalize_quantity(amount: Amount, unit: String) -> NormalizeResponse {
    let quantity = normalize(&amount, &unit);
    NormalizeResponse {
        amount,
        unit,
        value: quantity.value,
        axis: quantity.axis,
        base_unit: quantity.axis.base_unit(),
    }
}

pub fn find_missing_ingredients(
    config: &Config,
    ingredients: &[RequiredIngredient],
    pantry: &[StockEntry],
) -> FindMissingResponse {
    let missing = find_missing_on(ingredients, pantry, config.today());
    FindMissingResponse {
        today: format_today(config),
        can_make: missing.is_empty(),
        missing_count: missing.len(),
        missing,
    }
}

pub fn can_make_recipe(
    config: &Config,
    ingredients: &[RequiredIngredient],
    pantry: &[StockEntry],
) -> CanMakeResponse {
    let missing_count = find_missing_on(ingredients, pantry, config.today()).len();
    CanMakeResponse {
        can_make: missing_count == 0,
        missing_count,
        status: readiness_label(missing_count),
    }
}

pub fn assess_recipe(
    config: &Config,
    ingredients: &[RequiredIngredient],
    pantry: &[StockEntry],
) -> AssessRecipeResponse {
    let assessed = assess_recipe_on(ingredients, pantry, config.today());
    AssessRecipeResponse {
        today: format_today(config),
        can_make: assessed.iter().all(|a| !a.missing),
        ingredients: assessed,
    }
}

pub fn check_recipes(config: &Config, recipes: &[Recipe], pantry: &[StockEntry]) -> CheckRecipesResponse {
    let readiness = check_recipes_on(recipes, pantry, config.today());
    CheckRecipesResponse {
        today: format_today(config),
        ready_count: readiness.iter().filter(|r| r.can_make).count(),
        recipes: readiness,
    }
}

pub fn check_expiry(config: &Config, date: &str) -> CheckExpiryResponse {
    let today = config.today();
    let status = expiry_status_on(date, today, &config.thresholds);
    CheckExpiryResponse {
        date: date.to_string(),
        today: format_today(config),
        expired: is_expired_on(date, today),
        days_until_expiry: days_until_expiry(date, today),
        status,
        label: status.label(),
    }
}

pub fn pantry_expiry_report(config: &Config, pantry: &[StockEntry]) -> ExpiryReportResponse {
    let entries = expiry_report_on(pantry, config.today(), &config.thresholds);
    let count_of = |status: ExpiryStatus| entries.iter().filter(|e| e.status == status).count();
    ExpiryReportResponse {
        today: format_today(config),
        expired_count: count_of(ExpiryStatus::Expired),
        expiring_soon_count: count_of(ExpiryStatus::ExpiringSoon),
        entries,
    }
}

/// Turn the ingredients the pantry cannot cover into shopping-list records
pub fn missing_to_shopping_list(
    config: &Config,
    ingredients: &[RequiredIngredient],
    pantry: &[StockEntry],
    category: Option<&str>,
) -> ShoppingListResponse {
    let missing = find_missing_on(ingredients, pantry, config.today());
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(&config.shopping_category);
    let items = shopping_list_for(&missing, category);
    ShoppingListResponse {
        count: items.len(),
        items,
    }
}

/// Turn purchased shopping-list items into pantry records dated today
pub fn purchased_to_pantry(config: &Config, items: Vec<ShoppingListItem>) -> RestockResponse {
    let today = config.today();
    let entries: Vec<StockEntry> = items.into_iter().map(|item| item.into_stock_entry(today)).collect();
    RestockResponse {
        today: format_today(config),
        count: entries.len(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config() -> Config {
        Config {
            today_override: NaiveDate::from_ymd_opt(2026, 3, 10),
            ..Config::default()
        }
    }

    fn cake() -> Vec<RequiredIngredient> {
        vec![
            RequiredIngredient::structured("Eggs", "2", "pcs"),
            RequiredIngredient::structured("Sugar", "200", "g"),
        ]
    }

    fn pantry() -> Vec<StockEntry> {
        vec![
            StockEntry::new("Eggs", "12", "pcs").with_expiry("2026-03-20"),
            StockEntry::new("Sugar", "1", "kg").with_expiry("2026-03-01"),
        ]
    }

    #[test]
    fn test_normalize_quantity() {
        let result = normalize_quantity(Amount::from("2"), "cup".to_string());
        assert_eq!(result.axis, Axis::Volume);
        assert_eq!(result.base_unit, "ml");
        assert!((result.value - 473.16).abs() < 0.001);
    }

    #[test]
    fn test_find_missing_skips_expired_sugar() {
        let result = find_missing_ingredients(&config(), &cake(), &pantry());
        assert_eq!(result.today, "2026-03-10");
        assert!(!result.can_make);
        assert_eq!(result.missing, vec![RequiredIngredient::structured("Sugar", "200", "g")]);
    }

    #[test]
    fn test_can_make_recipe() {
        let result = can_make_recipe(&config(), &cake()[..1], &pantry());
        assert!(result.can_make);
        assert_eq!(result.status, "Ready to Cook!");

        let result = can_make_recipe(&config(), &cake(), &pantry());
        assert_eq!(result.status, "Missing 1 items");
    }

    #[test]
    fn test_assess_recipe() {
        let result = assess_recipe(&config(), &cake(), &pantry());
        assert!(!result.can_make);
        assert_eq!(result.ingredients[0].available, 12.0);
        assert_eq!(result.ingredients[1].expired_entries, 1);
        assert_eq!(result.ingredients[1].shortfall, 200.0);
    }

    #[test]
    fn test_check_recipes_counts_ready() {
        let recipes = vec![
            Recipe::new("Boiled eggs", vec![RequiredIngredient::bare("Eggs")]),
            Recipe::new("Cake", cake()),
        ];
        let result = check_recipes(&config(), &recipes, &pantry());
        assert_eq!(result.ready_count, 1);
        assert_eq!(result.recipes[1].missing_count, 1);
    }

    #[test]
    fn test_check_expiry() {
        let result = check_expiry(&config(), "2026-03-09");
        assert!(result.expired);
        assert_eq!(result.days_until_expiry, Some(-1));
        assert_eq!(result.label, Some("Expired"));

        let result = check_expiry(&config(), "");
        assert!(!result.expired);
        assert_eq!(result.status, ExpiryStatus::NoDate);
    }

    #[test]
    fn test_pantry_expiry_report_counts() {
        let result = pantry_expiry_report(&config(), &pantry());
        assert_eq!(result.expired_count, 1);
        assert_eq!(result.expiring_soon_count, 0);
        assert_eq!(result.entries[0].name, "Sugar");
    }

    #[test]
    fn test_missing_to_shopping_list_category() {
        let result = missing_to_shopping_list(&config(), &cake(), &pantry(), None);
        assert_eq!(result.count, 1);
        assert_eq!(result.items[0].name, "Sugar");
        assert_eq!(result.items[0].category, "Other");
        assert!(!result.items[0].completed);

        let result = missing_to_shopping_list(&config(), &cake(), &pantry(), Some("Baking"));
        assert_eq!(result.items[0].category, "Baking");
    }

    #[test]
    fn test_purchased_to_pantry_restocks_missing_sugar() {
        let list = missing_to_shopping_list(&config(), &cake(), &pantry(), Some(""));
        let result = purchased_to_pantry(&config(), list.items);
        assert_eq!(result.count, 1);
        assert_eq!(result.entries[0].name, "Sugar");
        assert_eq!(result.entries[0].expiry_date.as_deref(), Some("2026-03-10"));
        assert_eq!(result.entries[0].category.as_deref(), Some("Other"));

        let mut restocked = pantry();
        restocked.extend(result.entries);
        assert!(find_missing_ingredients(&config(), &cake(), &restocked).can_make);
    }
}
