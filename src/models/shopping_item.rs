//! Shopping list item model
//!
//! A missing ingredient shaped as a new grocery record, ready for the
//! shopping-list sink to persist. Once bought, the record moves back into
//! the pantry as a fresh stock entry.

use chrono::NaiveDate;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::{RequiredIngredient, StockEntry};
use crate::quantity::Amount;

/// Category assigned to items added from a recipe check
pub const DEFAULT_CATEGORY: &str = "Other";

/// A grocery record that has not been acquired yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ShoppingListItem {
    pub name: String,
    pub amount: Amount,
    pub unit: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Always false for freshly added items
    #[serde(default)]
    pub completed: bool,
}

impl ShoppingListItem {
    /// Build a shopping-list record from a missing ingredient
    pub fn from_missing(ingredient: &RequiredIngredient, category: &str) -> Self {
        let resolved = ingredient.resolve();
        Self {
            name: resolved.name,
            amount: resolved.amount,
            unit: resolved.unit,
            category: category.to_string(),
            notes: None,
            completed: false,
        }
    }

    /// Turn a purchased item into a pantry record dated `today`
    ///
    /// Name, amount and unit carry over unchanged. An empty category becomes
    /// "Other" and missing notes become an empty string.
    pub fn into_stock_entry(self, today: NaiveDate) -> StockEntry {
        let category = if self.category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.category
        };
        StockEntry {
            id: None,
            name: self.name,
            amount: Some(self.amount),
            unit: self.unit,
            expiry_date: Some(today.format("%Y-%m-%d").to_string()),
            category: Some(category),
            notes: Some(self.notes.unwrap_or_default()),
        }
    }
}

/// Build shopping-list records for a list of missing ingredients, in order
pub fn shopping_list_for(missing: &[RequiredIngredient], category: &str) -> Vec<ShoppingListItem> {
    missing
        .iter()
        .map(|ingredient| ShoppingListItem::from_missing(ingredient, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{Axis, NormalizedQuantity};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_structured_ingredient() {
        let item = ShoppingListItem::from_missing(
            &RequiredIngredient::structured("Sugar", "200", "g"),
            DEFAULT_CATEGORY,
        );
        assert_eq!(item.name, "Sugar");
        assert_eq!(item.amount, Amount::from("200"));
        assert_eq!(item.unit, "g");
        assert_eq!(item.category, "Other");
        assert!(item.notes.is_none());
        assert!(!item.completed);
    }

    #[test]
    fn test_from_bare_ingredient() {
        let item = ShoppingListItem::from_missing(&RequiredIngredient::bare("Basil"), "Produce");
        assert_eq!(item.amount, Amount::from("1"));
        assert_eq!(item.unit, "pcs");
        assert_eq!(item.category, "Produce");
    }

    #[test]
    fn test_shopping_list_preserves_order() {
        let missing = vec![
            RequiredIngredient::bare("Basil"),
            RequiredIngredient::structured("Milk", "1", "l"),
        ];
        let names: Vec<_> = shopping_list_for(&missing, DEFAULT_CATEGORY)
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Basil", "Milk"]);
    }

    #[test]
    fn test_purchased_item_expires_today() {
        let mut item = ShoppingListItem::from_missing(
            &RequiredIngredient::structured("Milk", "2", "l"),
            "Dairy",
        );
        item.notes = Some("semi-skimmed".into());
        item.completed = true;

        let entry = item.into_stock_entry(day("2026-03-10"));
        assert_eq!(entry.name, "Milk");
        assert_eq!(entry.amount, Some(Amount::from("2")));
        assert_eq!(entry.unit, "l");
        assert_eq!(entry.expiry_date.as_deref(), Some("2026-03-10"));
        assert_eq!(entry.category.as_deref(), Some("Dairy"));
        assert_eq!(entry.notes.as_deref(), Some("semi-skimmed"));
        assert_eq!(entry.quantity(), NormalizedQuantity::new(2000.0, Axis::Volume));
    }

    #[test]
    fn test_purchased_item_defaults_category_and_notes() {
        let item: ShoppingListItem =
            serde_json::from_str(r#"{"name":"Eggs","amount":12,"unit":"pcs","category":""}"#).unwrap();
        let entry = item.into_stock_entry(day("2026-03-10"));
        assert_eq!(entry.category.as_deref(), Some("Other"));
        assert_eq!(entry.notes.as_deref(), Some(""));

        let item: ShoppingListItem =
            serde_json::from_str(r#"{"name":"Eggs","amount":12,"unit":"pcs"}"#).unwrap();
        assert_eq!(item.into_stock_entry(day("2026-03-10")).category.as_deref(), Some("Other"));
    }
}
