//! Availability matching
//!
//! Decides which of a recipe's ingredients the pantry cannot cover.
//!
//! For each required ingredient, every pantry entry whose name contains the
//! ingredient name (case-insensitive) and which is not expired contributes
//! its normalized quantity, provided it is measured on the same axis as the
//! requirement. The ingredient is missing when that total falls short.
//! Substring matching is permissive on purpose: "Soy Sauce" covers "Sauce".

use chrono::NaiveDate;
use serde::Serialize;

use super::expiry::{entry_expired_on, today};
use crate::models::{RequiredIngredient, ResolvedIngredient, StockEntry};
use crate::quantity::NormalizedQuantity;

/// Case-insensitive substring match of a requirement name inside a stock name
pub fn name_matches(stock_name: &str, required_name: &str) -> bool {
    stock_name
        .to_lowercase()
        .contains(&required_name.to_lowercase())
}

/// How well the pantry covers one required ingredient
#[derive(Debug, Clone, Serialize)]
pub struct IngredientAvailability {
    /// The ingredient exactly as listed in the recipe
    pub ingredient: RequiredIngredient,
    pub resolved: ResolvedIngredient,
    pub required: NormalizedQuantity,
    /// Total of usable stock, in the requirement's base unit
    pub available: f64,
    /// Required minus available, never below zero
    pub shortfall: f64,
    /// Entries whose name matched, expired or not
    pub matched_entries: usize,
    pub expired_entries: usize,
    /// Matching, unexpired entries skipped for being on another axis
    pub other_axis_entries: usize,
    pub missing: bool,
}

/// Assess one ingredient against a pantry snapshot as of `today`
pub fn assess_ingredient_on(
    ingredient: &RequiredIngredient,
    pantry: &[StockEntry],
    today: NaiveDate,
) -> IngredientAvailability {
    let resolved = ingredient.resolve();
    let required = resolved.quantity();

    let mut available = 0.0;
    let mut matched_entries = 0;
    let mut expired_entries = 0;
    let mut other_axis_entries = 0;

    for entry in pantry {
        if !name_matches(&entry.name, &resolved.name) {
            continue;
        }
        matched_entries += 1;

        if entry_expired_on(entry, today) {
            expired_entries += 1;
            continue;
        }

        let stock = entry.quantity();
        if stock.axis != required.axis {
            tracing::trace!(
                "Skipping '{}' for '{}': {} stock vs {} requirement",
                entry.name,
                resolved.name,
                stock.axis,
                required.axis
            );
            other_axis_entries += 1;
            continue;
        }
        available += stock.value;
    }

    let missing = available < required.value;

    IngredientAvailability {
        ingredient: ingredient.clone(),
        required,
        available,
        shortfall: (required.value - available).max(0.0),
        matched_entries,
        expired_entries,
        other_axis_entries,
        missing,
        resolved,
    }
}

/// Assess every ingredient of a recipe, in recipe order
pub fn assess_recipe_on(
    required: &[RequiredIngredient],
    pantry: &[StockEntry],
    today: NaiveDate,
) -> Vec<IngredientAvailability> {
    required
        .iter()
        .map(|ingredient| assess_ingredient_on(ingredient, pantry, today))
        .collect()
}

/// Ingredients the pantry cannot cover as of `today`, in recipe order
pub fn find_missing_on(
    required: &[RequiredIngredient],
    pantry: &[StockEntry],
    today: NaiveDate,
) -> Vec<RequiredIngredient> {
    let missing: Vec<RequiredIngredient> = assess_recipe_on(required, pantry, today)
        .into_iter()
        .filter(|a| a.missing)
        .map(|a| a.ingredient)
        .collect();

    tracing::debug!(
        "{} of {} ingredients missing against {} pantry entries",
        missing.len(),
        required.len(),
        pantry.len()
    );
    missing
}

/// Ingredients the pantry cannot cover today, in recipe order
pub fn find_missing(required: &[RequiredIngredient], pantry: &[StockEntry]) -> Vec<RequiredIngredient> {
    find_missing_on(required, pantry, today())
}

/// Whether every ingredient is covered as of `today`
pub fn can_make_on(required: &[RequiredIngredient], pantry: &[StockEntry], today: NaiveDate) -> bool {
    find_missing_on(required, pantry, today).is_empty()
}

/// Whether every ingredient is covered today ("ready to cook")
pub fn can_make(required: &[RequiredIngredient], pantry: &[StockEntry]) -> bool {
    can_make_on(required, pantry, today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    const TODAY: &str = "2026-03-10";

    #[test]
    fn test_name_matching_is_case_insensitive_substring() {
        assert!(name_matches("Whole Milk", "Milk"));
        assert!(name_matches("milk chocolate", "Milk"));
        assert!(name_matches("Soy Sauce", "sauce"));
        assert!(name_matches("Cane Sugar", "Sugar"));
        assert!(name_matches("Cane Sugar", "Can"));
        assert!(!name_matches("Milk", "Whole Milk"));
    }

    #[test]
    fn test_aggregates_across_entries_and_units() {
        let pantry = vec![
            StockEntry::new("Flour", "500", "g"),
            StockEntry::new("Flour", "1", "kg"),
        ];
        let req = RequiredIngredient::structured("Flour", "1", "kg");
        let a = assess_ingredient_on(&req, &pantry, day(TODAY));
        assert_eq!(a.available, 1500.0);
        assert_eq!(a.required.value, 1000.0);
        assert!(!a.missing);
        assert_eq!(a.shortfall, 0.0);
    }

    #[test]
    fn test_axis_mismatch_contributes_nothing() {
        let pantry = vec![StockEntry::new("Milk", "2", "pcs")];
        let req = RequiredIngredient::structured("Milk", "1", "l");
        let a = assess_ingredient_on(&req, &pantry, day(TODAY));
        assert_eq!(a.available, 0.0);
        assert_eq!(a.other_axis_entries, 1);
        assert!(a.missing);
        assert_eq!(a.shortfall, 1000.0);
    }

    #[test]
    fn test_padded_unit_does_not_convert() {
        let pantry = vec![StockEntry::new("Flour", "1", " kg")];
        let req = RequiredIngredient::structured("Flour", "1000", "g");
        let a = assess_ingredient_on(&req, &pantry, day(TODAY));
        assert_eq!(a.available, 0.0);
        assert_eq!(a.other_axis_entries, 1);
        assert!(a.missing);
    }

    #[test]
    fn test_expired_stock_is_ignored() {
        let pantry = vec![
            StockEntry::new("Butter", "250", "g").with_expiry("2026-03-09"),
            StockEntry::new("Butter", "100", "g").with_expiry(TODAY),
        ];
        let req = RequiredIngredient::structured("Butter", "200", "g");
        let a = assess_ingredient_on(&req, &pantry, day(TODAY));
        assert_eq!(a.matched_entries, 2);
        assert_eq!(a.expired_entries, 1);
        assert_eq!(a.available, 100.0);
        assert!(a.missing);

        let req = RequiredIngredient::structured("Butter", "100", "g");
        assert!(!assess_ingredient_on(&req, &pantry, day(TODAY)).missing);
    }

    #[test]
    fn test_expiry_boundary_against_local_today() {
        let now = today();
        let yesterday = (now - Duration::days(1)).format("%Y-%m-%d").to_string();
        let this_day = now.format("%Y-%m-%d").to_string();
        let req = vec![RequiredIngredient::structured("Yogurt", "1", "pcs")];

        let stale = vec![StockEntry::new("Yogurt", "1", "pcs").with_expiry(yesterday)];
        assert_eq!(find_missing(&req, &stale), req);

        let fresh = vec![StockEntry::new("Yogurt", "1", "pcs").with_expiry(this_day)];
        assert!(find_missing(&req, &fresh).is_empty());
    }

    #[test]
    fn test_substring_matches_count_toward_requirement() {
        let req = vec![RequiredIngredient::structured("Milk", "1", "l")];
        let pantry = vec![StockEntry::new("Whole Milk", "1", "l")];
        assert!(find_missing_on(&req, &pantry, day(TODAY)).is_empty());

        let pantry = vec![StockEntry::new("milk chocolate", "1000", "ml")];
        assert!(find_missing_on(&req, &pantry, day(TODAY)).is_empty());
    }

    #[test]
    fn test_bare_ingredient_needs_one_piece() {
        let req = vec![RequiredIngredient::bare("Lemon")];
        assert_eq!(find_missing_on(&req, &[], day(TODAY)), req);

        let pantry = vec![StockEntry::new("Lemon", "1", "pcs")];
        assert!(find_missing_on(&req, &pantry, day(TODAY)).is_empty());

        // Stock in grams cannot cover a piece count
        let pantry = vec![StockEntry::new("Lemon", "500", "g")];
        assert_eq!(find_missing_on(&req, &pantry, day(TODAY)), req);
    }

    #[test]
    fn test_malformed_stock_does_not_block_other_entries() {
        let pantry = vec![
            StockEntry::new("Rice", "lots", "g").with_expiry("whenever"),
            StockEntry::new("Rice", "300", "g"),
        ];
        let req = vec![RequiredIngredient::structured("Rice", "250", "g")];
        assert!(find_missing_on(&req, &pantry, day(TODAY)).is_empty());
    }

    #[test]
    fn test_corrupt_json_record_does_not_reject_snapshot() {
        let json = r#"[
            {"name":"Rice","amount":true,"unit":"g"},
            {"name":"Rice","amount":"300","unit":"g","expiryDate":20260310},
            {"name":null,"unit":null}
        ]"#;
        let pantry: Vec<StockEntry> = serde_json::from_str(json).unwrap();
        let req = vec![RequiredIngredient::structured("Rice", "250", "g")];
        assert!(find_missing_on(&req, &pantry, day(TODAY)).is_empty());

        let a = assess_ingredient_on(&req[0], &pantry, day(TODAY));
        assert_eq!(a.matched_entries, 2);
        assert_eq!(a.available, 300.0);
    }

    #[test]
    fn test_zero_requirement_is_always_met() {
        let req = vec![RequiredIngredient::structured("Pepper", "a pinch", "g")];
        assert!(can_make_on(&req, &[], day(TODAY)));
    }

    #[test]
    fn test_find_missing_keeps_recipe_order_and_is_idempotent() {
        let req = vec![
            RequiredIngredient::structured("Sugar", "200", "g"),
            RequiredIngredient::structured("Eggs", "2", "pcs"),
            RequiredIngredient::bare("Vanilla"),
            RequiredIngredient::structured("Milk", "250", "ml"),
        ];
        let pantry = vec![StockEntry::new("Eggs", "12", "pcs")];

        let first = find_missing_on(&req, &pantry, day(TODAY));
        let second = find_missing_on(&req, &pantry, day(TODAY));
        assert_eq!(first, second);
        let names: Vec<&str> = first.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Sugar", "Vanilla", "Milk"]);
    }

    #[test]
    fn test_end_to_end_eggs_and_sugar() {
        let req = vec![
            RequiredIngredient::structured("Eggs", "2", "pcs"),
            RequiredIngredient::structured("Sugar", "200", "g"),
        ];
        let pantry = vec![StockEntry::new("Eggs", "12", "pcs").with_expiry("2099-01-01")];

        let missing = find_missing(&req, &pantry);
        assert_eq!(missing, vec![RequiredIngredient::structured("Sugar", "200", "g")]);
        assert!(!can_make(&req, &pantry));
    }

    #[test]
    fn test_empty_recipe_can_be_made() {
        assert!(can_make_on(&[], &[], day(TODAY)));
    }

    #[test]
    fn test_concurrent_checks_share_one_snapshot() {
        let pantry = vec![
            StockEntry::new("Flour", "1", "kg"),
            StockEntry::new("Eggs", "6", "pcs"),
        ];
        let recipes: Vec<Vec<RequiredIngredient>> = vec![
            vec![RequiredIngredient::structured("Flour", "500", "g")],
            vec![RequiredIngredient::structured("Eggs", "12", "pcs")],
            vec![RequiredIngredient::bare("Salt")],
        ];

        let pantry = &pantry;
        let results: Vec<bool> = std::thread::scope(|s| {
            let handles: Vec<_> = recipes
                .iter()
                .map(|req| s.spawn(move || can_make_on(req, pantry, day(TODAY))))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, vec![true, false, false]);
    }
}
