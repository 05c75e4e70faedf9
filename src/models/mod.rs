//! Data models
//!
//! Plain snapshot types exchanged with the pantry, recipe, and shopping-list
//! collaborators.

mod ingredient;
mod recipe;
mod shopping_item;
mod stock_entry;

pub use ingredient::{RequiredIngredient, ResolvedIngredient, StructuredIngredient, DEFAULT_AMOUNT};
pub use recipe::Recipe;
pub use shopping_item::{shopping_list_for, ShoppingListItem, DEFAULT_CATEGORY};
pub use stock_entry::StockEntry;
