//! Ingredient availability module
//!
//! Pure checks of recipes against a pantry snapshot. Nothing here holds
//! state between calls; callers pass fresh snapshots every time.

pub mod expiry;
pub mod matcher;
pub mod readiness;

pub use expiry::{
    days_until_expiry, entry_expired_on, expiry_report_on, expiry_status_on, is_expired,
    is_expired_on, parse_expiry_date, today, ExpiryReportEntry, ExpiryStatus, ExpiryThresholds,
};
pub use matcher::{
    assess_ingredient_on, assess_recipe_on, can_make, can_make_on, find_missing, find_missing_on,
    name_matches, IngredientAvailability,
};
pub use readiness::{check_recipes_on, readiness_label, recipe_readiness_on, RecipeReadiness};
