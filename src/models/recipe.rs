//! Recipe model
//!
//! A recipe snapshot as seen by the availability checks: a name and its
//! ordered ingredient list.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::RequiredIngredient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<RequiredIngredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<RequiredIngredient>) -> Self {
        Self {
            id: None,
            name: name.into(),
            ingredients,
        }
    }
}
